//! Text format shared by graph files and visualizer exports.
//!
//! ```text
//! <V>
//! <label_1> ... <label_V>
//! <E>
//! <src> <dst> <weight>
//! ...
//! ```
//!
//! Files are written one section per line, but read back as a plain token
//! stream. Vertex indices are 1-based on disk and 0-based in memory.
//! Visualizer exports omit the edge count line and may append a `PATH:`
//! section.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// Marker line preceding the exported path
pub const PATH_MARKER: &str = "PATH:";

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Replaces the graph with the contents of a graph file.
    ///
    /// Returns [`Error::GraphFileMissing`] when the file does not exist, so the
    /// caller can offer to create one. On any error the graph is left untouched.
    pub fn read_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::GraphFileMissing(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let parsed = Self::parse(&text)?;
        *self = parsed;

        info!(
            "Loaded graph from {}: {} vertices, {} edges",
            path.display(),
            self.vertex_count(),
            self.edge_count()
        );
        Ok(())
    }

    /// Parses the text graph format as one whitespace-separated token stream,
    /// so line breaks between sections or labels carry no meaning.
    ///
    /// When the tokens run out inside the label section, the remaining labels
    /// fall back to the 1-based vertex number and the graph has no edges.
    /// Edge triples that are malformed or reference unknown vertices are
    /// skipped. Reading stops at the `PATH:` marker of a visualizer export.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let vertex_count: usize = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| Error::MalformedGraphFile("missing vertex count".to_string()))?;

        let mut graph = DirectedGraph::new();
        let mut labels_ran_out = false;
        for i in 0..vertex_count {
            match tokens.next() {
                Some(label) => graph.add_vertex(label),
                None => {
                    labels_ran_out = true;
                    graph.add_vertex(&(i + 1).to_string())
                }
            };
        }

        if labels_ran_out {
            debug!("Graph text ended inside the label section; no edges read");
            return Ok(graph);
        }

        let declared_edges: usize = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| Error::MalformedGraphFile("missing edge count".to_string()))?;

        let edge_tokens: Vec<&str> = tokens.take_while(|token| *token != PATH_MARKER).collect();
        for triple in edge_tokens.chunks(3).take(declared_edges) {
            match parse_edge::<W>(triple) {
                Some((source, destination, weight)) => {
                    graph.add_edge(source, destination, weight);
                }
                None => debug!("Skipping malformed edge: {:?}", triple),
            }
        }

        Ok(graph)
    }

    /// Saves the graph in the loadable text format
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_header(&mut out)?;
        writeln!(out, "{}", self.edge_count())?;
        self.write_edges(&mut out)?;
        out.flush()?;

        info!("Saved graph to {}", path.display());
        Ok(())
    }

    /// Exports vertices and edges for the external visualizer
    pub fn export_for_visualizer<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut out = BufWriter::new(File::create(path.as_ref())?);
        self.write_header(&mut out)?;
        self.write_edges(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Exports for the visualizer and appends the given path (0-based vertex IDs)
    pub fn export_with_path<P: AsRef<Path>>(&self, path: P, vertex_path: &[usize]) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_header(&mut out)?;
        self.write_edges(&mut out)?;

        writeln!(out)?;
        writeln!(out, "{}", PATH_MARKER)?;
        writeln!(out, "{}", join_one_based(vertex_path))?;
        out.flush()?;

        debug!(
            "Exported graph with {}-vertex path to {}",
            vertex_path.len(),
            path.display()
        );
        Ok(())
    }

    fn write_header<O: Write>(&self, out: &mut O) -> Result<()> {
        writeln!(out, "{}", self.vertex_count())?;
        writeln!(out, "{}", self.labels().join(" "))?;
        Ok(())
    }

    fn write_edges<O: Write>(&self, out: &mut O) -> Result<()> {
        for (source, edges) in self.adjacency().iter().enumerate() {
            for edge in edges {
                writeln!(out, "{} {} {}", source + 1, edge.destination + 1, edge.weight)?;
            }
        }
        Ok(())
    }
}

/// Parses `<src> <dst> <weight>` with 1-based vertices into 0-based IDs
fn parse_edge<W: Weight>(triple: &[&str]) -> Option<(usize, usize, W)> {
    let [source, destination, weight] = triple else {
        return None;
    };
    let source: usize = source.parse().ok()?;
    let destination: usize = destination.parse().ok()?;
    let weight = W::from_str_radix(weight, 10).ok()?;

    Some((source.checked_sub(1)?, destination.checked_sub(1)?, weight))
}

fn join_one_based(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
