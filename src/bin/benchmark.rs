use std::env;
use std::time::Instant;

use sssp_lab::comparison::{AlgorithmSelection, Comparison, ComparisonReport};
use sssp_lab::graph::generators::generate_random;
use sssp_lab::graph::{DirectedGraph, Graph};

/// Default graph sizes when none are given on the command line
const DEFAULT_SIZES: [usize; 5] = [100, 500, 1_000, 2_000, 5_000];

/// Average number of edges per vertex
const EDGE_FACTOR: f64 = 2.0;

// Runs the comparison harness on one randomly generated graph
fn benchmark_size(size: usize) -> sssp_lab::Result<ComparisonReport> {
    let mut rng = rand::thread_rng();

    let generated = Instant::now();
    let graph = generate_random(size, EDGE_FACTOR, 1..100, &mut rng);
    log::debug!("Generated {} vertices in {:?}", size, generated.elapsed());

    println!(
        "\nGraph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let comparison: Comparison<i64, DirectedGraph<i64>> = Comparison::new(&graph);
    comparison.compare_performance(0, AlgorithmSelection::Both)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut sizes: Vec<usize> = args.iter().filter_map(|a| a.parse().ok()).collect();
    if sizes.is_empty() {
        sizes = DEFAULT_SIZES.to_vec();
    }

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average)", EDGE_FACTOR);
    println!("=====================================================");

    let mut summary = Vec::new();
    for &size in &sizes {
        let report = benchmark_size(size)?;

        if json {
            println!("{}", report.to_json()?);
        } else {
            for line in &report.logs {
                println!("{}", line);
            }
        }

        summary.push((size, report));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<18} | {:<10}",
        "Vertices", "Dijkstra (us)", "Bellman-Ford (us)", "Slowdown"
    );
    println!("-----------------------------------------------------");

    for (size, report) in &summary {
        let time_of = |i: usize| report.metrics.get(i).map_or(0, |m| m.execution_time_us);
        let slowdown = report
            .slowdown_ratio()
            .map_or_else(|| "n/a".to_string(), |r| format!("{:.2}x", r));

        println!(
            "{:<10} | {:<15} | {:<18} | {:<10}",
            size,
            time_of(0),
            time_of(1),
            slowdown
        );
    }

    Ok(())
}
