//! Deterministic text embedding.
//!
//! The retrieval contract only needs a stable fixed-length text-to-vector
//! function: the corpus is scanned exhaustively, so embedding quality trades
//! off against having zero external model artifacts. `HashedBowEmbedder`
//! hashes lowercase words into signed buckets and L2-normalizes, which gives
//! cosine scores that track lexical overlap. A model-backed embedder can be
//! swapped in behind the [`Embedder`] trait without touching call sites.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use unicode_segmentation::UnicodeSegmentation;

/// Fixed dimensionality shared by every vector in a search operation.
pub const EMBEDDING_DIM: usize = 384;

/// A deterministic text-to-vector function with a fixed output length.
pub trait Embedder {
    /// Length of every vector this embedder produces.
    fn dimension(&self) -> usize;

    /// Embed one text. Must return the same vector for the same text.
    fn embed(&self, text: &str) -> Vec<f32>;
}

/// Signed feature-hashing bag-of-words embedder.
#[derive(Debug, Clone, Default)]
pub struct HashedBowEmbedder;

impl HashedBowEmbedder {
    pub fn new() -> Self {
        Self
    }
}

impl Embedder for HashedBowEmbedder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; EMBEDDING_DIM];

        for word in text.unicode_words() {
            let token = word.to_lowercase();
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let hash = hasher.finish();

            let bucket = (hash % EMBEDDING_DIM as u64) as usize;
            // One hash bit decides the sign so unrelated texts score near zero
            let sign = if hash & (1 << 63) == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        l2_normalize(&mut vector);
        vector
    }
}

/// Normalize in place; the all-zero vector (text with no words) is left as is.
fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
