//! ragpipe-retrieval
//!
//! Retrieval backends implementing `ragpipe_core::traits::Retriever`. Only
//! the fixed-data dummy backend exists today; real vector backends plug in
//! behind the same trait.

pub mod dummy;

pub use dummy::DummyRetriever;
