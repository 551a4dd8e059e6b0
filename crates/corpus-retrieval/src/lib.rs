//! Corpus Retrieval - in-memory regulatory corpus with similarity search
//!
//! This crate provides:
//! - The regulatory chunk type and document store
//! - Deterministic text embedding behind the `Embedder` trait
//! - Brute-force cosine-similarity search with deterministic tie-breaking
//! - Context formatting for downstream generation
//! - Retrieval configuration and error types

pub mod config;
pub mod document;
pub mod embeddings;
pub mod error;
pub mod retriever;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use config::RetrievalConfig;
pub use document::RegulatoryChunk;
pub use embeddings::{Embedder, HashedBowEmbedder, EMBEDDING_DIM};
pub use error::CorpusError;
pub use retriever::RegulatoryRetriever;
pub use search::{format_context, SearchResult};
pub use store::DocumentStore;
