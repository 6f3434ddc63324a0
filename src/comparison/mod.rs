//! Side-by-side benchmark of Dijkstra and Bellman-Ford on one graph.

pub mod metrics;
mod table;

pub use metrics::{AlgorithmSelection, ComparisonReport, PerformanceMetrics};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::mem::size_of;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::algorithm::{AlgorithmKind, Algorithms};
use crate::comparison::table::ReportTable;
use crate::graph::{Edge, Graph, Weight};
use crate::{Error, Result};

const TABLE: ReportTable = ReportTable::new(16, 20);

/// Runs both algorithms under identical conditions and reports on them
#[derive(Debug)]
pub struct Comparison<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'g G,
    algorithms: Algorithms<'g, W, G>,
}

impl<'g, W, G> Comparison<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        Comparison {
            graph,
            algorithms: Algorithms::new(graph),
        }
    }

    /// Times a single untraced run of `kind` from `start`.
    ///
    /// Dijkstra is never executed on a graph with negative weights; the
    /// metrics then report a zero-time failure.
    pub fn measure_algorithm(&self, start: usize, kind: AlgorithmKind) -> Result<PerformanceMetrics> {
        if !self.graph.has_vertex(start) {
            return Err(Error::SourceNotFound(start));
        }

        if kind == AlgorithmKind::Dijkstra && self.graph.has_negative_weights() {
            warn!("Skipping Dijkstra: graph has negative edge weights");
            return Ok(PerformanceMetrics::skipped(kind));
        }

        let timer = Instant::now();
        let result = self.algorithms.run(kind, start, false)?;
        let elapsed = timer.elapsed();

        let v = self.graph.vertex_count();
        let e = self.graph.edge_count();

        let metrics = PerformanceMetrics {
            algorithm: kind,
            execution_time_us: elapsed.as_micros() as u64,
            memory_usage_bytes: estimate_memory::<W>(v, e),
            distances_calculated: result.distances.len(),
            complexity: complexity_estimate(kind, v, e),
            success: result.success && !result.has_negative_cycle,
        };

        debug!(
            "{} from {} took {} us (success = {})",
            kind, start, metrics.execution_time_us, metrics.success
        );
        Ok(metrics)
    }

    /// Runs the selected algorithms and assembles the formatted report
    pub fn compare_performance(
        &self,
        start: usize,
        selection: AlgorithmSelection,
    ) -> Result<ComparisonReport> {
        let mut report = ComparisonReport::new(
            start,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        );

        report.logs.push("        ========================================".to_string());
        report.logs.push("              PERFORMANCE COMPARISON REPORT".to_string());
        report.logs.push("        ========================================".to_string());
        report.logs.push(format!(
            "Start vertex: {}   Vertices (V): {}  Edges (E): {}",
            start + 1,
            report.vertex_count,
            report.edge_count
        ));

        for &kind in selection.kinds() {
            let metrics = self.measure_algorithm(start, kind)?;
            report.metrics.push(metrics);
        }

        if selection == AlgorithmSelection::Both {
            push_table(&mut report);

            report.logs.push("                        --- COMPARISON ---".to_string());
            match report.slowdown_ratio() {
                Some(ratio) => report.logs.push(format!(
                    "Bellman-Ford is {:.6} times slower than Dijkstra",
                    ratio
                )),
                None => report
                    .logs
                    .push("Insufficient timing resolution for ratio.".to_string()),
            }
            report.logs.push(String::new());
        } else {
            push_summaries(&mut report);
        }

        info!(
            "Compared {} from vertex {} on {} vertices / {} edges",
            selection, start, report.vertex_count, report.edge_count
        );
        Ok(report)
    }

    /// Human-readable complexity estimate, e.g. `O(V * E) = O(3 * 3) = O(9)`
    pub fn estimate_complexity(kind: AlgorithmKind, vertices: usize, edges: usize) -> String {
        let estimate = complexity_estimate(kind, vertices, edges) as i64;
        match kind {
            AlgorithmKind::Dijkstra => format!(
                "O(E log V) = O({} * log {}) ≈ O({})",
                edges, vertices, estimate
            ),
            AlgorithmKind::BellmanFord => format!(
                "O(V * E) = O({} * {}) = O({})",
                vertices, edges, estimate
            ),
        }
    }

    /// Writes every report line to a text file
    pub fn generate_report<P: AsRef<Path>>(report: &ComparisonReport, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        for line in &report.logs {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        info!("Wrote comparison report to {}", path.display());
        Ok(())
    }
}

/// Two slots (distance, predecessor) per vertex plus one record per edge
fn estimate_memory<W: Weight>(vertices: usize, edges: usize) -> usize {
    vertices * size_of::<W>() * 2 + edges * size_of::<Edge<W>>()
}

/// E·ln V for Dijkstra, V·E for Bellman-Ford
fn complexity_estimate(kind: AlgorithmKind, vertices: usize, edges: usize) -> f64 {
    match kind {
        AlgorithmKind::Dijkstra if vertices > 1 => edges as f64 * (vertices as f64).ln(),
        AlgorithmKind::Dijkstra => 0.0,
        AlgorithmKind::BellmanFord => vertices as f64 * edges as f64,
    }
}

fn push_table(report: &mut ComparisonReport) {
    let (Some(d), Some(b)) = (
        report.metrics_for(AlgorithmKind::Dijkstra).cloned(),
        report.metrics_for(AlgorithmKind::BellmanFord).cloned(),
    ) else {
        return;
    };

    let rows = [
        ("Run time", format!("{} us", d.execution_time_us), format!("{} us", b.execution_time_us)),
        (
            "Memory used",
            format!("{} bytes", d.memory_usage_bytes),
            format!("{} bytes", b.memory_usage_bytes),
        ),
        ("Complexity", d.complexity_label(), b.complexity_label()),
        ("Status", d.status_label().to_string(), b.status_label().to_string()),
    ];

    let table = TABLE.fitting(
        rows.iter()
            .flat_map(|(_, left, right)| [left.as_str(), right.as_str()]),
    );
    let border = table.border();

    report.logs.push(border.clone());
    report.logs.push(table.row("", "DIJKSTRA", "BELLMAN-FORD"));
    report.logs.push(border.clone());
    for (label, left, right) in &rows {
        report.logs.push(table.row(label, left, right));
    }
    report.logs.push(border);
}

fn push_summaries(report: &mut ComparisonReport) {
    let mut lines = Vec::new();
    for metrics in &report.metrics {
        lines.push(format!("--- {} ---", metrics.algorithm_name().to_uppercase()));
        lines.push(format!("Run time: {} us", metrics.execution_time_us));
        lines.push(format!("Memory used: {} bytes", metrics.memory_usage_bytes));
        lines.push(format!("Complexity: {}", metrics.complexity_label()));
        lines.push(format!("Status: {}", metrics.status_label()));
        lines.push(String::new());
    }
    report.logs.extend(lines);
}
