use log::debug;

use crate::algorithm::trace::StepTrace;
use crate::algorithm::{relax_candidate, PathResult, ShortestPathAlgorithm};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a binary heap and lazy deletion.
///
/// Only correct for non-negative weights. The algorithm does not check this
/// itself; callers gate on [`Graph::has_negative_weights`].
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize, trace: bool) -> Result<PathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut result = PathResult::initial(n, source);
        let mut steps = StepTrace::new(graph, trace);
        steps.header("DIJKSTRA'S ALGORITHM", source);

        let mut finalized = vec![false; n];
        let mut queue = MinPriorityQueue::new();
        queue.push(source, W::zero());
        let mut iterations = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry left behind by an earlier relaxation
            if finalized[u] {
                continue;
            }
            finalized[u] = true;
            iterations += 1;

            steps.line(String::new);
            steps.line(|| format!("[Iteration {}]", iterations));
            steps.line(|| {
                format!(
                    "Processing vertex: {} (distance = {})",
                    graph.display_label(u),
                    dist_u
                )
            });

            for (v, weight) in graph.outgoing_edges(u) {
                if let Some(new_dist) = relax_candidate(Some(dist_u), weight, result.distances[v]) {
                    result.distances[v] = Some(new_dist);
                    result.predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                    steps.relax(u, v, new_dist);
                }
            }

            steps.distance_table(&result.distances);
        }

        steps.final_distances(&result.distances);

        debug!(
            "Dijkstra from {} finalized {} of {} vertices",
            source, iterations, n
        );

        result.success = true;
        result.logs = steps.finish();
        Ok(result)
    }
}
