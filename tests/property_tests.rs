use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sssp_lab::graph::generators::generate_random;
use sssp_lab::graph::{DirectedGraph, Graph};
use sssp_lab::Algorithms;

// Minimum path weight over all simple paths, by exhaustive search
fn brute_force(graph: &DirectedGraph<i64>, source: usize) -> Vec<Option<i64>> {
    fn visit(
        graph: &DirectedGraph<i64>,
        u: usize,
        cost: i64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<i64>>,
    ) {
        if best[u].map_or(true, |b| cost < b) {
            best[u] = Some(cost);
        }
        for (v, w) in graph.outgoing_edges(u) {
            if !on_path[v] {
                on_path[v] = true;
                visit(graph, v, cost + w, on_path, best);
                on_path[v] = false;
            }
        }
    }

    let n = graph.vertex_count();
    let mut best = vec![None; n];
    let mut on_path = vec![false; n];
    on_path[source] = true;
    visit(graph, source, 0, &mut on_path, &mut best);
    best
}

fn edge_set(graph: &DirectedGraph<i64>) -> Vec<(usize, usize, i64)> {
    let mut edges: Vec<_> = (0..graph.vertex_count())
        .flat_map(|u| graph.outgoing_edges(u).map(move |(v, w)| (u, v, w)))
        .collect();
    edges.sort();
    edges
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dijkstra_matches_brute_force(seed in any::<u64>(), n in 1usize..7, factor in 0.5f64..2.5) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(n, factor, 0..20, &mut rng);
        let source = (seed as usize) % n;

        let result = Algorithms::<i64, DirectedGraph<i64>>::new(&graph)
            .dijkstra(source, false)
            .unwrap();
        prop_assert_eq!(result.distances, brute_force(&graph, source));
    }

    #[test]
    fn bellman_ford_matches_dijkstra(seed in any::<u64>(), n in 1usize..30, factor in 0.5f64..3.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(n, factor, 0..100, &mut rng);
        let algorithms = Algorithms::<i64, DirectedGraph<i64>>::new(&graph);

        let dijkstra = algorithms.dijkstra(0, false).unwrap();
        let bellman_ford = algorithms.bellman_ford(0, false).unwrap();

        prop_assert!(bellman_ford.success);
        prop_assert_eq!(dijkstra.distances, bellman_ford.distances);
    }

    #[test]
    fn make_undirected_is_idempotent(seed in any::<u64>(), n in 1usize..20) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = generate_random(n, 1.5, -10..10, &mut rng);

        graph.make_undirected();
        let once = edge_set(&graph);
        graph.make_undirected();

        prop_assert_eq!(graph.edge_count(), once.len());
        prop_assert_eq!(edge_set(&graph), once);
    }

    #[test]
    fn paths_sum_to_distance(seed in any::<u64>(), n in 2usize..25) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(n, 2.0, 1..30, &mut rng);
        let result = Algorithms::<i64, DirectedGraph<i64>>::new(&graph)
            .dijkstra(0, false)
            .unwrap();

        for v in 0..n {
            let path = result.path_to(v);
            match result.distances[v] {
                None => prop_assert!(path.is_empty()),
                Some(d) => {
                    let total: i64 = path
                        .windows(2)
                        .map(|p| graph.get_edge_weight(p[0], p[1]).unwrap())
                        .sum();
                    prop_assert_eq!(path[0], 0);
                    prop_assert_eq!(total, d);
                }
            }
        }
    }
}
