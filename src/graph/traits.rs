use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Signed};

/// Edge weight type: a bounded signed integer
pub trait Weight: PrimInt + Signed + Display + Debug + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Display + Debug + Send + Sync + 'static {}

/// Trait representing a weighted directed graph with labeled vertices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Gets the display label of a vertex
    fn vertex_label(&self, vertex: usize) -> Option<&str>;

    /// Returns true if any stored edge weight is negative
    fn has_negative_weights(&self) -> bool {
        (0..self.vertex_count())
            .any(|u| self.outgoing_edges(u).any(|(_, weight)| weight.is_negative()))
    }

    /// Label used in traces and reports; falls back to the 1-based vertex number
    fn display_label(&self, vertex: usize) -> String {
        match self.vertex_label(vertex) {
            Some(label) => label.to_string(),
            None => (vertex + 1).to_string(),
        }
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Appends a vertex with the given label and returns its ID
    fn add_vertex(&mut self, label: &str) -> usize;

    /// Adds a directed edge, overwriting the weight if the edge already exists.
    /// Returns false when either endpoint is out of range.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Removes every vertex and edge
    fn clear(&mut self);
}
