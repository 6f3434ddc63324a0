use crate::graph::{DirectedGraph, MutableGraph, Weight};
use rand::prelude::*;
use std::ops::Range;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
/// Self-loops are skipped; repeated pairs overwrite the earlier weight.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    weights: Range<i64>,
    rng: &mut R,
) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(weights.clone());
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a width x height grid where each cell links to its right and
/// lower neighbours in both directions with the given weight
pub fn generate_grid<W: Weight>(width: usize, height: usize, weight: W) -> DirectedGraph<W> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    let index = |x: usize, y: usize| y * width + x;
    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), weight);
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), weight);
            }
        }
    }

    graph.make_undirected();
    graph
}

/// Generates a chain 0 -> 1 -> ... -> n-1 whose last edge closes a cycle back
/// to 1 with total weight `cycle_weight`
pub fn generate_cycle_chain(n: usize, cycle_weight: i64) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 3 {
        return graph;
    }

    for v in 0..n - 1 {
        graph.add_edge(v, v + 1, 1);
    }

    // Cycle 1 -> 2 -> ... -> n-1 -> 1 carries n-2 unit edges plus the closing edge
    let closing = cycle_weight - (n as i64 - 2);
    graph.add_edge(n - 1, 1, closing);
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;

    #[test]
    fn random_graph_respects_weight_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_random(50, 2.0, 1..10, &mut rng);

        assert_eq!(graph.vertex_count(), 50);
        assert!(graph.edge_count() > 0);
        for u in 0..50 {
            for (v, w) in graph.outgoing_edges(u) {
                assert_ne!(u, v);
                assert!((1..10).contains(&w));
            }
        }
    }

    #[test]
    fn grid_is_symmetric() {
        let graph = generate_grid(3, 2, 1i32);
        // 3x2 grid has 7 undirected links
        assert_eq!(graph.edge_count(), 14);
    }

    #[test]
    fn cycle_chain_has_requested_weight() {
        let graph = generate_cycle_chain(5, -3);
        let total: i64 = [(1, 2), (2, 3), (3, 4), (4, 1)]
            .iter()
            .map(|&(u, v)| graph.get_edge_weight(u, v).unwrap())
            .sum();
        assert_eq!(total, -3);
    }
}
