//! Sliding-window text chunking.
//!
//! Chunks are measured in characters rather than tokens so this stage stays
//! model-agnostic.

use crate::error::{Error, Result};

/// Window parameters for [`chunk_text`].
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters.
    pub chunk_size: usize,
    /// Characters shared between the tail of one window and the head of the
    /// next, before trimming.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { chunk_size: 1000, overlap: 200 }
    }
}

/// Split `text` into overlapping windows of at most `chunk_size` characters.
///
/// Each window is trimmed of leading and trailing whitespace; windows that
/// are empty after trimming are dropped, so whitespace-only input produces
/// no chunks. The cursor advances by `chunk_size - overlap` per window.
/// Empty input yields an empty list.
///
/// Fails with [`Error::InvalidConfig`] when `chunk_size` is zero or
/// `overlap` is not smaller than `chunk_size`. Validation runs before any
/// windowing, regardless of `text`.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    if chunk_size == 0 {
        return Err(Error::InvalidConfig(
            "chunk_size must be a positive integer".to_string(),
        ));
    }
    if overlap >= chunk_size {
        return Err(Error::InvalidConfig(
            "overlap must be smaller than chunk_size".to_string(),
        ));
    }

    // Window over characters, not bytes; byte offsets could land inside a
    // multi-byte sequence.
    let chars: Vec<char> = text.chars().collect();
    let step = chunk_size - overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        start += step;
    }

    Ok(chunks)
}
