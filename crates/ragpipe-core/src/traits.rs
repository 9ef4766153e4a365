use crate::error::Result;
use crate::types::RetrievalResult;

/// A retrieval backend mapping a query embedding to scored chunk texts.
///
/// Implementations must return at most `top_k` results ordered by
/// descending score, and fail with [`crate::error::Error::InvalidArgument`]
/// when `top_k` is zero.
pub trait Retriever: Send + Sync {
    fn retrieve(&self, query_embedding: &[f32], top_k: usize) -> Result<Vec<RetrievalResult>>;
}
