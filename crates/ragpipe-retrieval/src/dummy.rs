//! Fixed-data retriever used to validate the retrieval contract.
//!
//! Performs no real scoring. It exists so callers can be written and tested
//! before a real backend lands.

use ragpipe_core::error::{Error, Result};
use ragpipe_core::traits::Retriever;
use ragpipe_core::types::RetrievalResult;

/// Deterministic stand-in backend returning a fixed result set.
#[derive(Debug, Default)]
pub struct DummyRetriever;

impl DummyRetriever {
    pub fn new() -> Self {
        Self
    }
}

impl Retriever for DummyRetriever {
    fn retrieve(&self, _query_embedding: &[f32], top_k: usize) -> Result<Vec<RetrievalResult>> {
        if top_k == 0 {
            return Err(Error::InvalidArgument(
                "top_k must be a positive integer".to_string(),
            ));
        }

        // Fixed corpus, already in descending score order
        let results = vec![
            RetrievalResult { text: "Dummy chunk A".to_string(), score: 0.9 },
            RetrievalResult { text: "Dummy chunk B".to_string(), score: 0.7 },
            RetrievalResult { text: "Dummy chunk C".to_string(), score: 0.5 },
        ];

        Ok(results.into_iter().take(top_k).collect())
    }
}
