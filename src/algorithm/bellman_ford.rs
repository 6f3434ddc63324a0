use log::{debug, warn};

use crate::algorithm::trace::StepTrace;
use crate::algorithm::{relax_candidate, PathResult, ShortestPathAlgorithm};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford with negative cycle detection.
///
/// Runs exactly V-1 relaxation passes over every edge (sources in index
/// order, each source's edges in insertion order), then one more scan. Any
/// edge that still relaxes marks a negative cycle reachable from the source;
/// cycles the source cannot reach are never reported.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize, trace: bool) -> Result<PathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut result = PathResult::initial(n, source);
        let mut steps = StepTrace::new(graph, trace);
        steps.header("BELLMAN-FORD ALGORITHM", source);

        let passes = n - 1;
        let mut converged_at = None;

        for pass in 1..=passes {
            let mut updated = false;

            steps.line(String::new);
            steps.line(|| format!("[Pass {}/{}]", pass, passes));

            for u in 0..n {
                for (v, weight) in graph.outgoing_edges(u) {
                    if let Some(new_dist) =
                        relax_candidate(result.distances[u], weight, result.distances[v])
                    {
                        result.distances[v] = Some(new_dist);
                        result.predecessors[v] = Some(u);
                        updated = true;
                        steps.relax(u, v, new_dist);
                    }
                }
            }

            // No early exit: the remaining passes still run
            if !updated {
                converged_at.get_or_insert(pass);
                steps.line(|| "  (No updates in this pass - early termination possible)".to_string());
            }

            steps.distance_table(&result.distances);
        }

        steps.section("CHECKING FOR NEGATIVE CYCLES");
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if relax_candidate(result.distances[u], weight, result.distances[v]).is_some() {
                    result.has_negative_cycle = true;
                    steps.line(|| "NEGATIVE CYCLE DETECTED!".to_string());
                    steps.line(|| {
                        format!(
                            "Edge: {} -> {} (weight = {})",
                            graph.display_label(u),
                            graph.display_label(v),
                            weight
                        )
                    });
                }
            }
        }

        if result.has_negative_cycle {
            warn!("Bellman-Ford from {} found a reachable negative cycle", source);
        } else {
            steps.line(|| "No negative cycles detected.".to_string());
        }

        steps.final_distances(&result.distances);

        match converged_at {
            Some(pass) => debug!("Bellman-Ford from {} converged at pass {}/{}", source, pass, passes),
            None => debug!("Bellman-Ford from {} updated in all {} passes", source, passes),
        }

        result.success = !result.has_negative_cycle;
        result.logs = steps.finish();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn negative_edge_without_cycle() {
        let mut graph: DirectedGraph<i32> = DirectedGraph::with_vertices(3);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 5);
        graph.add_edge(2, 1, -3);

        let result = BellmanFord::new().compute_shortest_paths(&graph, 0, false).unwrap();
        assert!(result.success);
        assert!(!result.has_negative_cycle);
        assert_eq!(result.distances, vec![Some(0), Some(2), Some(5)]);
        assert_eq!(result.predecessors[1], Some(2));
    }

    #[test]
    fn runs_every_pass_even_after_convergence() {
        let mut graph: DirectedGraph<i32> = DirectedGraph::with_vertices(4);
        graph.add_edge(0, 1, 1);

        let result = BellmanFord::new().compute_shortest_paths(&graph, 0, true).unwrap();
        let passes = result.logs.iter().filter(|l| l.starts_with("[Pass")).count();
        let hints = result
            .logs
            .iter()
            .filter(|l| l.contains("early termination possible"))
            .count();

        assert_eq!(passes, 3);
        assert_eq!(hints, 2);
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let mut graph: DirectedGraph<i32> = DirectedGraph::with_vertices(4);
        graph.add_edge(0, 1, 2);
        graph.add_edge(2, 3, -1);
        graph.add_edge(3, 2, -1);

        let result = BellmanFord::new().compute_shortest_paths(&graph, 0, false).unwrap();
        assert!(result.success);
        assert_eq!(result.distances[2], None);
    }
}
