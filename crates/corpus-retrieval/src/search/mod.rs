//! Search module - brute-force cosine-similarity ranking over the corpus
//!
//! This module provides:
//! - The per-query search result type
//! - Cosine similarity and the ranked full scan
//! - Context formatting for the downstream generation step

pub mod context;
pub mod vector;

pub use context::format_context;
pub use vector::{cosine_similarity, rank_by_similarity};

use serde::{Deserialize, Serialize};

/// One ranked passage returned by a search, produced fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub article_number: u32,
    pub source: String,
    /// Cosine similarity against the query, in [-1, 1].
    pub relevance_score: f32,
}
