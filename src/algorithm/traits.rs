use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<W>
where
    W: Weight,
{
    /// False when the distances cannot be trusted (negative cycle)
    pub success: bool,

    /// Source vertex ID
    pub start_vertex: usize,

    /// Distances from source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Path to one destination, filled by [`PathResult::materialize_path`]
    pub shortest_path: Vec<usize>,

    /// Step trace, only populated when tracing was requested
    pub logs: Vec<String>,

    /// Set by Bellman-Ford when a negative cycle is reachable from the source
    pub has_negative_cycle: bool,
}

impl<W> PathResult<W>
where
    W: Weight,
{
    /// Fresh result with every vertex unreached except the source at distance zero
    pub fn initial(vertex_count: usize, start_vertex: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[start_vertex] = Some(W::zero());

        PathResult {
            success: false,
            start_vertex,
            distances,
            predecessors: vec![None; vertex_count],
            shortest_path: Vec::new(),
            logs: Vec::new(),
            has_negative_cycle: false,
        }
    }

    /// Vertices from the source to `destination`, or empty when unreachable or
    /// out of range
    pub fn path_to(&self, destination: usize) -> Vec<usize> {
        match self.distances.get(destination) {
            Some(Some(_)) => reconstruct_path(destination, &self.predecessors),
            _ => Vec::new(),
        }
    }

    /// Distance to `destination`; `Ok(None)` means the vertex is unreachable
    pub fn distance_to(&self, destination: usize) -> Result<Option<W>> {
        self.distances
            .get(destination)
            .copied()
            .ok_or(Error::InvalidVertex(destination))
    }

    /// Stores the path to `destination` in `shortest_path` and returns it
    pub fn materialize_path(&mut self, destination: usize) -> &[usize] {
        self.shortest_path = self.path_to(destination);
        &self.shortest_path
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Walks predecessor links from `destination` back to the root.
///
/// Returns an empty path if the chain revisits a vertex, which only happens
/// when a negative cycle corrupted the predecessor tree.
fn reconstruct_path(destination: usize, predecessors: &[Option<usize>]) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(destination);

    while let Some(vertex) = current {
        if path.len() >= predecessors.len() {
            log::warn!("Cycle detected in path reconstruction at vertex {}", vertex);
            return Vec::new();
        }
        path.push(vertex);
        current = predecessors[vertex];
    }

    path.reverse();
    path
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices,
    /// recording a step trace in the result when `trace` is set
    fn compute_shortest_paths(&self, graph: &G, source: usize, trace: bool) -> Result<PathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &PathResult<W>, target: usize) -> Vec<usize> {
        result.path_to(target)
    }
}
