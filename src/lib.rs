//! SSSP Lab - traced single-source shortest paths
//!
//! This library computes shortest-path trees over weighted directed graphs with
//! two classical algorithms:
//!
//! - Dijkstra's algorithm, O(E log V), valid for non-negative weights only.
//! - Bellman-Ford, O(V * E), which also detects reachable negative cycles.
//!
//! Both can record a human-readable trace of every relaxation step. The
//! [`Comparison`] harness runs them on the same input and reports timing,
//! memory estimates and theoretical complexity.

pub mod algorithm;
pub mod comparison;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod session;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, AlgorithmKind, Algorithms, PathResult,
    ShortestPathAlgorithm,
};
pub use comparison::{AlgorithmSelection, Comparison, ComparisonReport, PerformanceMetrics};
pub use config::LabConfig;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use session::Session;

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Graph file does not exist: {}", .0.display())]
    GraphFileMissing(PathBuf),

    #[error("Malformed graph file: {0}")]
    MalformedGraphFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
