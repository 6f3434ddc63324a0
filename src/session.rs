//! Explicit session state: the current graph and the most recent result.

use log::{info, warn};

use crate::algorithm::{AlgorithmKind, Algorithms, PathResult};
use crate::comparison::{AlgorithmSelection, Comparison, ComparisonReport};
use crate::config::LabConfig;
use crate::graph::{DirectedGraph, Graph, Weight};
use crate::Result;

/// Holds the graph being edited together with the last algorithm run.
///
/// Every mutation of the graph drops the last result, since its distances
/// would no longer describe the graph.
#[derive(Debug)]
pub struct Session<W = i32>
where
    W: Weight,
{
    config: LabConfig,
    graph: DirectedGraph<W>,
    last_result: Option<(AlgorithmKind, PathResult<W>)>,
}

impl<W> Session<W>
where
    W: Weight,
{
    pub fn new(config: LabConfig) -> Self {
        Session {
            config,
            graph: DirectedGraph::new(),
            last_result: None,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn graph(&self) -> &DirectedGraph<W> {
        &self.graph
    }

    /// Mutable access to the graph; invalidates the last result
    pub fn graph_mut(&mut self) -> &mut DirectedGraph<W> {
        self.last_result = None;
        &mut self.graph
    }

    /// Replaces the graph wholesale
    pub fn replace_graph(&mut self, graph: DirectedGraph<W>) {
        self.last_result = None;
        self.graph = graph;
    }

    /// The last result and the algorithm that produced it
    pub fn last_result(&self) -> Option<(AlgorithmKind, &PathResult<W>)> {
        self.last_result.as_ref().map(|(kind, result)| (*kind, result))
    }

    /// Loads the configured graph file
    pub fn load(&mut self) -> Result<()> {
        let path = self.config.graph_file.clone();
        self.graph.read_from_file(&path)?;
        self.last_result = None;
        Ok(())
    }

    /// Saves the graph to the configured graph file
    pub fn save(&self) -> Result<()> {
        self.config.ensure_data_dir()?;
        self.graph.save_to_file(&self.config.graph_file)
    }

    /// Runs an algorithm and keeps its result as the session's last result.
    ///
    /// Dijkstra is refused (`Ok(None)`) when the graph has negative weights.
    pub fn run(&mut self, kind: AlgorithmKind, start: usize, trace: bool) -> Result<Option<&PathResult<W>>> {
        if kind == AlgorithmKind::Dijkstra && self.graph.has_negative_weights() {
            warn!("Dijkstra refused: graph has negative edge weights, use Bellman-Ford");
            return Ok(None);
        }

        let result = Algorithms::<W, DirectedGraph<W>>::new(&self.graph).run(kind, start, trace)?;
        info!(
            "{} from vertex {} reached {} of {} vertices",
            kind,
            start + 1,
            result.reachable_count(),
            self.graph.vertex_count()
        );

        let (_, stored) = self.last_result.insert((kind, result));
        Ok(Some(&*stored))
    }

    /// Materializes the path to `destination` in the last result.
    /// Returns `None` when nothing has been run yet.
    pub fn path_to(&mut self, destination: usize) -> Option<&[usize]> {
        let (_, result) = self.last_result.as_mut()?;
        Some(result.materialize_path(destination))
    }

    /// Compares the selected algorithms from `start`
    pub fn compare(&self, start: usize, selection: AlgorithmSelection) -> Result<ComparisonReport> {
        Comparison::<W, DirectedGraph<W>>::new(&self.graph).compare_performance(start, selection)
    }

    /// Writes a report to the configured report file
    pub fn save_report(&self, report: &ComparisonReport) -> Result<()> {
        self.config.ensure_data_dir()?;
        Comparison::<W, DirectedGraph<W>>::generate_report(report, &self.config.report_file)
    }

    /// Exports the graph for the visualizer, with the last materialized path
    /// when there is one
    pub fn export_last_path(&self) -> Result<()> {
        self.config.ensure_data_dir()?;
        let target = &self.config.export_file;

        match &self.last_result {
            Some((_, result)) if !result.shortest_path.is_empty() => {
                self.graph.export_with_path(target, &result.shortest_path)
            }
            _ => self.graph.export_for_visualizer(target),
        }
    }
}
