use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// File locations used by a lab session
#[derive(Debug, Clone)]
pub struct LabConfig {
    pub data_dir: PathBuf,
    /// Graph file loaded and saved by default
    pub graph_file: PathBuf,
    /// Where comparison reports are written
    pub report_file: PathBuf,
    /// Export consumed by the external visualizer
    pub export_file: PathBuf,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self::with_data_dir("data")
    }
}

impl LabConfig {
    /// Places every file under `data_dir` with the default file names
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            graph_file: data_dir.join("graph.txt"),
            report_file: data_dir.join("report.txt"),
            export_file: data_dir.join("temp.txt"),
            data_dir,
        }
    }

    /// Creates the data folder if it does not exist yet
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
