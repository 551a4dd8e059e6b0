//! Retrieval over the loaded regulatory corpus.

use tracing::{debug, info};

use crate::embeddings::{Embedder, HashedBowEmbedder};
use crate::error::CorpusError;
use crate::search::{rank_by_similarity, SearchResult};
use crate::store::DocumentStore;

/// Retrieves relevant regulatory passages for free-text queries.
///
/// Chunk embeddings are computed once at construction; the retriever is
/// read-only afterwards, so shared references are safe across threads.
pub struct RegulatoryRetriever {
    store: DocumentStore,
    embedder: Box<dyn Embedder + Send + Sync>,
    chunk_vectors: Vec<Vec<f32>>,
}

impl RegulatoryRetriever {
    /// Build a retriever over `store`, embedding every chunk up front.
    pub fn new(store: DocumentStore, embedder: Box<dyn Embedder + Send + Sync>) -> Self {
        let chunk_vectors = store
            .chunks()
            .iter()
            .map(|chunk| embedder.embed(&chunk.text))
            .collect();
        info!(documents = store.len(), "loaded retriever");

        Self {
            store,
            embedder,
            chunk_vectors,
        }
    }

    /// Build a retriever with the default hashed bag-of-words embedder.
    pub fn with_default_embedder(store: DocumentStore) -> Self {
        Self::new(store, Box::new(HashedBowEmbedder::new()))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Search the corpus for the `top_k` passages most similar to `query`.
    ///
    /// Results are sorted by descending relevance score; equal scores keep
    /// corpus order. The result length is `min(top_k, corpus_len)`.
    ///
    /// # Errors
    ///
    /// - [`CorpusError::InvalidArgument`] when `top_k` is zero or the query
    ///   is blank
    /// - [`CorpusError::EmptyCorpus`] when no chunks are loaded, so an empty
    ///   corpus is never mistaken for "no relevant matches"
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>, CorpusError> {
        if top_k == 0 {
            return Err(CorpusError::InvalidArgument(
                "top_k must be a positive integer".to_string(),
            ));
        }
        if query.trim().is_empty() {
            return Err(CorpusError::InvalidArgument(
                "query must not be blank".to_string(),
            ));
        }
        if self.store.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        let query_vector = self.embedder.embed(query);
        let ranked = rank_by_similarity(&query_vector, &self.chunk_vectors, top_k);
        debug!(query, top_k, returned = ranked.len(), "similarity search");

        let results = ranked
            .into_iter()
            .map(|(index, score)| {
                let chunk = &self.store.chunks()[index];
                SearchResult {
                    text: chunk.text.clone(),
                    article_number: chunk.article_number,
                    source: chunk.source.clone(),
                    relevance_score: score,
                }
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RegulatoryChunk;

    fn chunk(article_number: u32, source: &str, text: &str) -> RegulatoryChunk {
        RegulatoryChunk {
            text: text.to_string(),
            article_number,
            source: source.to_string(),
        }
    }

    fn sample_retriever() -> RegulatoryRetriever {
        let store = DocumentStore::from_chunks(vec![
            chunk(
                122,
                "PRA Rulebook Art. 122",
                "Unrated corporate exposures shall be assigned a 100% risk weight \
                 where no credit assessment by a nominated ECAI is available.",
            ),
            chunk(
                125,
                "PRA Rulebook Art. 125",
                "Mortgages fully secured on residential property shall be assigned \
                 a 35% risk weight.",
            ),
            chunk(
                114,
                "PRA Rulebook Art. 114",
                "Claims on central governments denominated and funded in the \
                 domestic currency shall be assigned a 0% risk weight.",
            ),
        ]);
        RegulatoryRetriever::with_default_embedder(store)
    }

    #[test]
    fn returns_exactly_top_k_sorted_descending() {
        let retriever = sample_retriever();
        for top_k in 1..=3 {
            let results = retriever.search("risk weight for mortgages", top_k).unwrap();
            assert_eq!(results.len(), top_k);
            for pair in results.windows(2) {
                assert!(pair[0].relevance_score >= pair[1].relevance_score);
            }
        }
    }

    #[test]
    fn top_k_beyond_corpus_returns_all_chunks() {
        let retriever = sample_retriever();
        let results = retriever.search("risk weight", 50).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn corporate_query_ranks_corporate_chunk_first() {
        let retriever = sample_retriever();
        let results = retriever.search("unrated corporate exposure", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].article_number, 122);
        assert!(results[0].relevance_score > results[1].relevance_score);
    }

    #[test]
    fn results_carry_chunk_metadata() {
        let retriever = sample_retriever();
        let results = retriever.search("residential mortgages", 1).unwrap();
        assert_eq!(results[0].article_number, 125);
        assert_eq!(results[0].source, "PRA Rulebook Art. 125");
        assert!(results[0].text.contains("35% risk weight"));
    }

    #[test]
    fn zero_top_k_is_invalid() {
        let retriever = sample_retriever();
        assert!(matches!(
            retriever.search("anything", 0),
            Err(CorpusError::InvalidArgument(_))
        ));
    }

    #[test]
    fn blank_query_is_invalid() {
        let retriever = sample_retriever();
        assert!(matches!(
            retriever.search("   ", 3),
            Err(CorpusError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_corpus_is_signalled_explicitly() {
        let retriever = RegulatoryRetriever::with_default_embedder(DocumentStore::default());
        assert!(matches!(
            retriever.search("corporate exposures", 3),
            Err(CorpusError::EmptyCorpus)
        ));
    }

    #[test]
    fn search_is_deterministic_across_calls() {
        let retriever = sample_retriever();
        let first = retriever.search("central government exposure", 3).unwrap();
        let second = retriever.search("central government exposure", 3).unwrap();
        assert_eq!(first, second);
    }
}
