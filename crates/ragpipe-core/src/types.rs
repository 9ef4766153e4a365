//! Domain types shared by the ingestion pipeline and retrieval backends.

use serde::{Deserialize, Serialize};

/// A single scored retrieval hit.
///
/// `text` is the chunk payload. `score` is backend-specific but higher is
/// always better; result sequences are ordered by descending score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub text: String,
    pub score: f32,
}
