//! Document loading and the load→chunk ingestion pipeline.
//!
//! Only plain `.txt` files directly under the input directory are
//! considered, in sorted path order so repeated runs produce chunks in the
//! same order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::chunking::{chunk_text, ChunkingConfig};
use crate::error::{Error, Result};

/// Load the contents of every `.txt` file directly under `input_dir`.
///
/// Documents that are empty after trimming are skipped. Fails with
/// [`Error::InvalidInput`] when `input_dir` does not exist or is not a
/// directory; an empty directory is not an error.
pub fn load_text_files(input_dir: &Path) -> Result<Vec<String>> {
    if !input_dir.exists() {
        return Err(Error::InvalidInput(format!(
            "input directory does not exist: {}",
            input_dir.display()
        )));
    }
    if !input_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "input path is not a directory: {}",
            input_dir.display()
        )));
    }

    let mut documents = Vec::new();
    for path in list_txt_files(input_dir) {
        let content = fs::read_to_string(&path)?;
        let content = content.trim();
        // Empty documents would only produce empty chunks downstream
        if !content.is_empty() {
            documents.push(content.to_string());
        }
    }
    debug!(count = documents.len(), dir = %input_dir.display(), "loaded documents");
    Ok(documents)
}

fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut txt_files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    txt_files.sort();
    txt_files
}

/// Runs the load→chunk pipeline over a directory of raw text files.
#[derive(Default)]
pub struct IngestionPipeline {
    chunking: ChunkingConfig,
}

impl IngestionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(chunking: ChunkingConfig) -> Self {
        Self { chunking }
    }

    /// Load every document under `input_dir` and split it into chunks.
    /// Returns the flattened chunk list across all documents, in document
    /// order.
    pub fn run(&self, input_dir: &Path) -> Result<Vec<String>> {
        let documents = load_text_files(input_dir)?;
        self.chunk_documents(&documents)
    }

    /// Same as [`run`](Self::run) but over only the first `limit` documents
    /// in sorted order.
    pub fn run_limited(&self, input_dir: &Path, limit: usize) -> Result<Vec<String>> {
        let mut documents = load_text_files(input_dir)?;
        if documents.len() > limit {
            documents.truncate(limit);
        }
        self.chunk_documents(&documents)
    }

    fn chunk_documents(&self, documents: &[String]) -> Result<Vec<String>> {
        let mut all_chunks = Vec::new();
        for document in documents {
            let chunks = chunk_text(document, self.chunking.chunk_size, self.chunking.overlap)?;
            all_chunks.extend(chunks);
        }
        info!(
            documents = documents.len(),
            chunks = all_chunks.len(),
            "ingestion complete"
        );
        Ok(all_chunks)
    }
}
