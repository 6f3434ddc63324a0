use std::marker::PhantomData;

use crate::graph::{Graph, Weight};

/// Collects the human-readable step log of an algorithm run.
///
/// When disabled no line is ever formatted, so tracing costs nothing unless
/// the caller asked for it.
pub(crate) struct StepTrace<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'a G,
    lines: Option<Vec<String>>,
    _weight: PhantomData<W>,
}

impl<'a, W, G> StepTrace<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub(crate) fn new(graph: &'a G, enabled: bool) -> Self {
        StepTrace {
            graph,
            lines: enabled.then(Vec::new),
            _weight: PhantomData,
        }
    }

    pub(crate) fn line<F>(&mut self, message: F)
    where
        F: FnOnce() -> String,
    {
        if let Some(lines) = self.lines.as_mut() {
            lines.push(message());
        }
    }

    pub(crate) fn section(&mut self, title: &str) {
        self.line(String::new);
        self.line(|| format!("=== {} ===", title));
    }

    pub(crate) fn header(&mut self, title: &str, start: usize) {
        let graph = self.graph;
        self.line(|| format!("=== {} ===", title));
        self.line(|| format!("Starting vertex: {}", graph.display_label(start)));
        self.line(|| "Initializing distances: all = INF except start = 0".to_string());
    }

    pub(crate) fn relax(&mut self, from: usize, to: usize, distance: W) {
        let graph = self.graph;
        self.line(|| {
            format!(
                "  Relax: {} -> {} (new distance = {})",
                graph.display_label(from),
                graph.display_label(to),
                distance
            )
        });
    }

    /// One-line snapshot of every tentative distance
    pub(crate) fn distance_table(&mut self, distances: &[Option<W>]) {
        let graph = self.graph;
        self.line(|| {
            let cells: Vec<String> = distances
                .iter()
                .enumerate()
                .map(|(v, d)| format!("{}={}", graph.display_label(v), format_distance(*d)))
                .collect();
            format!("  Distances: {}", cells.join(" "))
        });
    }

    pub(crate) fn final_distances(&mut self, distances: &[Option<W>]) {
        self.section("FINAL DISTANCES");
        let graph = self.graph;
        for (v, distance) in distances.iter().enumerate() {
            self.line(|| match distance {
                Some(d) => format!("{} = {}", graph.display_label(v), d),
                None => format!("{} = INF (unreachable)", graph.display_label(v)),
            });
        }
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.lines.unwrap_or_default()
    }
}

/// Formats a distance, printing unreachable vertices as `INF`
pub fn format_distance<W: Weight>(distance: Option<W>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "INF".to_string(),
    }
}
