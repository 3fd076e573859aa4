use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of copying the matched files for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyResult {
    pub destination_folder: PathBuf,
    /// Destination paths, in the order the files were copied
    pub copied_paths: Vec<PathBuf>,
    /// Matched files that could not be copied
    pub skipped_count: usize,
}

impl CopyResult {
    pub fn empty(destination_folder: PathBuf) -> Self {
        Self {
            destination_folder,
            copied_paths: Vec::new(),
            skipped_count: 0,
        }
    }

    pub fn copied_count(&self) -> usize {
        self.copied_paths.len()
    }

    pub fn total_matched(&self) -> usize {
        self.copied_count() + self.skipped_count
    }
}

/// JSON body returned on success
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyResponse {
    pub status: String,
    pub count: usize,
    pub destination_folder: String,
    pub copied_files: Vec<String>,
    pub skipped_files: usize,
}

impl From<CopyResult> for CopyResponse {
    fn from(result: CopyResult) -> Self {
        Self {
            status: "success".to_string(),
            count: result.copied_count(),
            destination_folder: result.destination_folder.to_string_lossy().to_string(),
            copied_files: result
                .copied_paths
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect(),
            skipped_files: result.skipped_count,
        }
    }
}
