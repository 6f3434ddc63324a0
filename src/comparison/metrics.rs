use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::algorithm::AlgorithmKind;
use crate::Result;

/// Which algorithms a comparison should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlgorithmSelection {
    Dijkstra,
    BellmanFord,
    Both,
}

impl AlgorithmSelection {
    /// Algorithms to run, in report order
    pub fn kinds(&self) -> &'static [AlgorithmKind] {
        match self {
            AlgorithmSelection::Dijkstra => &[AlgorithmKind::Dijkstra],
            AlgorithmSelection::BellmanFord => &[AlgorithmKind::BellmanFord],
            AlgorithmSelection::Both => &[AlgorithmKind::Dijkstra, AlgorithmKind::BellmanFord],
        }
    }
}

impl From<AlgorithmKind> for AlgorithmSelection {
    fn from(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Dijkstra => AlgorithmSelection::Dijkstra,
            AlgorithmKind::BellmanFord => AlgorithmSelection::BellmanFord,
        }
    }
}

impl FromStr for AlgorithmSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(AlgorithmSelection::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(AlgorithmSelection::BellmanFord),
            "both" => Ok(AlgorithmSelection::Both),
            other => Err(format!("unknown algorithm: {}", other)),
        }
    }
}

impl fmt::Display for AlgorithmSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmSelection::Dijkstra => f.write_str("dijkstra"),
            AlgorithmSelection::BellmanFord => f.write_str("bellman-ford"),
            AlgorithmSelection::Both => f.write_str("both"),
        }
    }
}

/// Timing and cost estimates for one algorithm run
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub algorithm: AlgorithmKind,
    /// Wall-clock time in microseconds
    pub execution_time_us: u64,
    /// Estimated bytes for distances, predecessors and edges
    pub memory_usage_bytes: usize,
    pub distances_calculated: usize,
    /// Estimated operation count from the asymptotic bound
    pub complexity: f64,
    pub success: bool,
}

impl PerformanceMetrics {
    /// A run that was refused before it started
    pub fn skipped(algorithm: AlgorithmKind) -> Self {
        PerformanceMetrics {
            algorithm,
            execution_time_us: 0,
            memory_usage_bytes: 0,
            distances_calculated: 0,
            complexity: 0.0,
            success: false,
        }
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Complexity cell such as `O(E log V) ≈ O(3)`
    pub fn complexity_label(&self) -> String {
        format!(
            "{} ≈ O({})",
            self.algorithm.complexity_form(),
            self.complexity as i64
        )
    }

    pub fn status_label(&self) -> &'static str {
        if self.success {
            "Success"
        } else {
            "Failed"
        }
    }
}

/// Side-by-side outcome of a comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub start_vertex: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub metrics: Vec<PerformanceMetrics>,
    /// Formatted report lines, ready for display
    pub logs: Vec<String>,
}

impl ComparisonReport {
    pub fn new(start_vertex: usize, vertex_count: usize, edge_count: usize) -> Self {
        ComparisonReport {
            generated_at: Utc::now(),
            start_vertex,
            vertex_count,
            edge_count,
            metrics: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Metrics of the given algorithm, if it was run
    pub fn metrics_for(&self, kind: AlgorithmKind) -> Option<&PerformanceMetrics> {
        self.metrics.iter().find(|m| m.algorithm == kind)
    }

    /// Bellman-Ford time divided by Dijkstra time, when both were measured
    /// with a non-zero duration
    pub fn slowdown_ratio(&self) -> Option<f64> {
        let dijkstra = self.metrics_for(AlgorithmKind::Dijkstra)?.execution_time_us;
        let bellman_ford = self.metrics_for(AlgorithmKind::BellmanFord)?.execution_time_us;

        if dijkstra > 0 && bellman_ford > 0 {
            Some(bellman_ford as f64 / dijkstra as f64)
        } else {
            None
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
