pub mod traits;
pub mod trace;
pub mod dijkstra;
pub mod bellman_ford;

pub use traits::{PathResult, ShortestPathAlgorithm};

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::Serialize;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::{DirectedGraph, Graph, Weight};
use crate::Result;

/// The two shortest path algorithms offered by the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlgorithmKind {
    Dijkstra,
    BellmanFord,
}

impl AlgorithmKind {
    /// Display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::BellmanFord => "Bellman-Ford",
        }
    }

    /// Asymptotic running time in big-O form
    pub fn complexity_form(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "O(E log V)",
            AlgorithmKind::BellmanFord => "O(V × E)",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the improved distance for `v` if relaxing `u -> v` shortens it.
/// Unreached sources and overflowing sums never relax.
pub(crate) fn relax_candidate<W: Weight>(dist_u: Option<W>, weight: W, dist_v: Option<W>) -> Option<W> {
    let candidate = dist_u?.checked_add(&weight)?;
    match dist_v {
        Some(current) if current <= candidate => None,
        _ => Some(candidate),
    }
}

/// Stateless entry point to both algorithms over a borrowed graph.
///
/// The graph is only borrowed, so it cannot be mutated while an
/// `Algorithms` value is alive.
#[derive(Debug)]
pub struct Algorithms<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'g G,
    _weight: PhantomData<W>,
}

impl<'g, W, G> Algorithms<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        Algorithms {
            graph,
            _weight: PhantomData,
        }
    }

    /// The borrowed graph
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Dijkstra from `start`; the caller must ensure weights are non-negative
    pub fn dijkstra(&self, start: usize, trace: bool) -> Result<PathResult<W>> {
        Dijkstra::new().compute_shortest_paths(self.graph, start, trace)
    }

    /// Bellman-Ford from `start`; check `has_negative_cycle` before trusting distances
    pub fn bellman_ford(&self, start: usize, trace: bool) -> Result<PathResult<W>> {
        BellmanFord::new().compute_shortest_paths(self.graph, start, trace)
    }

    /// Runs the chosen algorithm
    pub fn run(&self, kind: AlgorithmKind, start: usize, trace: bool) -> Result<PathResult<W>> {
        match kind {
            AlgorithmKind::Dijkstra => self.dijkstra(start, trace),
            AlgorithmKind::BellmanFord => self.bellman_ford(start, trace),
        }
    }

    /// Vertices from the start to `destination`; empty when out of range or unreachable
    pub fn get_shortest_path(&self, result: &PathResult<W>, destination: usize) -> Vec<usize> {
        result.path_to(destination)
    }

    /// Distance to `destination`: `Err` for an invalid index, `Ok(None)` when unreachable
    pub fn get_distance(&self, result: &PathResult<W>, destination: usize) -> Result<Option<W>> {
        result.distance_to(destination)
    }
}

impl<'g, W> Algorithms<'g, W, DirectedGraph<W>>
where
    W: Weight,
{
    /// Exports the graph plus the path to `destination` for the external visualizer
    pub fn visualize_path<P: AsRef<Path>>(
        &self,
        result: &PathResult<W>,
        destination: usize,
        file: P,
    ) -> Result<Vec<usize>> {
        let path = self.get_shortest_path(result, destination);
        self.graph.export_with_path(file, &path)?;
        Ok(path)
    }
}
