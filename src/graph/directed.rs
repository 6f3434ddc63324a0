use crate::graph::traits::{Graph, MutableGraph, Weight};
use log::debug;

/// A directed arc stored in the adjacency list of its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub destination: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(destination: usize, weight: W) -> Self {
        Edge { destination, weight }
    }
}

/// A directed graph implementation using adjacency lists.
///
/// Vertices are dense zero-based indices. At most one edge exists per ordered
/// vertex pair: adding an existing edge again overwrites its weight.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W = i32>
where
    W: Weight,
{
    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<Edge<W>>>,

    /// Display label for each vertex (not required to be unique)
    labels: Vec<String>,

    /// Number of edges in the graph
    edge_count: usize,
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            labels: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with `vertices` vertices labeled `V0`, `V1`, ...
    pub fn with_vertices(vertices: usize) -> Self {
        let mut graph = DirectedGraph {
            adjacency: Vec::with_capacity(vertices),
            labels: Vec::with_capacity(vertices),
            edge_count: 0,
        };

        for v in 0..vertices {
            graph.add_vertex(&format!("V{}", v));
        }

        graph
    }

    /// Per-vertex outgoing edge lists
    pub fn adjacency(&self) -> &[Vec<Edge<W>>] {
        &self.adjacency
    }

    /// Vertex labels, indexed by vertex ID
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// A graph is usable by the algorithms once it has at least one vertex
    pub fn is_valid(&self) -> bool {
        !self.adjacency.is_empty()
    }

    /// Adds the missing reverse edge, with the same weight, for every edge.
    ///
    /// Existing reverse edges keep their own weight, so calling this twice
    /// leaves the edge set unchanged.
    pub fn make_undirected(&mut self) {
        let before = self.edge_count;

        for u in 0..self.adjacency.len() {
            // Reverse edges pushed onto this same list during the pass are scanned too
            let mut i = 0;
            while i < self.adjacency[u].len() {
                let Edge { destination, weight } = self.adjacency[u][i];
                if !self.has_edge(destination, u) {
                    self.add_edge(destination, u, weight);
                }
                i += 1;
            }
        }

        debug!("make_undirected added {} reverse edges", self.edge_count - before);
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|edge| (edge.destination, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        if let Some(edges) = self.adjacency.get(from) {
            edges.iter().any(|edge| edge.destination == to)
        } else {
            false
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|edge| edge.destination == to)
            .map(|edge| edge.weight)
    }

    fn vertex_label(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).map(String::as_str)
    }

    fn has_negative_weights(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .any(|edge| edge.weight.is_negative())
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, label: &str) -> usize {
        let new_id = self.adjacency.len();
        self.adjacency.push(Vec::new());
        self.labels.push(label.to_string());
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        // Check if edge already exists and update it if it does
        let outgoing = &mut self.adjacency[from];
        if let Some(edge) = outgoing.iter_mut().find(|edge| edge.destination == to) {
            edge.weight = weight;
            return true;
        }

        outgoing.push(Edge::new(to, weight));
        self.edge_count += 1;
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let Some(outgoing) = self.adjacency.get_mut(from) else {
            return false;
        };

        match outgoing.iter().position(|edge| edge.destination == to) {
            Some(index) => {
                outgoing.remove(index);
                self.edge_count -= 1;
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.labels.clear();
        self.edge_count = 0;
    }
}
