//! Cosine similarity and the ranked corpus scan.
//!
//! The scan is O(corpus_size x dimension) and intentional: the corpus holds
//! tens to low hundreds of chunks, so an approximate-nearest-neighbor index
//! would add moving parts without measurable benefit. If the corpus ever
//! outgrows a linear scan, an index belongs behind the same retriever
//! contract, not in its call sites.

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either operand has zero norm, so a wordless query scores
/// every chunk identically instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Score every stored vector against the query and return the `top_k` best
/// as `(corpus_index, score)` pairs, score descending.
///
/// Ties break deterministically toward the lower corpus index. Requesting
/// more results than there are vectors returns them all, ranked.
pub fn rank_by_similarity(
    query: &[f32],
    vectors: &[Vec<f32>],
    top_k: usize,
) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| (index, cosine_similarity(query, vector)))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    scored.truncate(top_k);
    scored
}
