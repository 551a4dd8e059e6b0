//! Configuration for the retrieval layer.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Default number of passages handed to the generation step.
pub const DEFAULT_TOP_K: usize = 3;

/// Default location of the regulatory corpus file.
pub const DEFAULT_CORPUS_PATH: &str = "data/sample_pra_corpus.json";

/// Retrieval configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalConfig {
    /// Path to the JSON corpus file
    pub corpus_path: PathBuf,
    /// Number of passages returned when the caller does not specify one
    pub default_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl RetrievalConfig {
    /// Load configuration from environment variables.
    ///
    /// Expected variables:
    /// - COREP_CORPUS_PATH: corpus file location (default: data/sample_pra_corpus.json)
    /// - COREP_TOP_K: default result count, positive integer (default: 3)
    pub fn from_env() -> Result<Self> {
        let corpus_path = std::env::var("COREP_CORPUS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_PATH));

        let default_top_k = match std::env::var("COREP_TOP_K") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|k| *k > 0)
                .ok_or_else(|| anyhow!("COREP_TOP_K must be a positive integer, got {raw:?}"))?,
            Err(_) => DEFAULT_TOP_K,
        };

        Ok(Self {
            corpus_path,
            default_top_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_sample_corpus() {
        let config = RetrievalConfig::default();
        assert_eq!(config.corpus_path, PathBuf::from(DEFAULT_CORPUS_PATH));
        assert_eq!(config.default_top_k, DEFAULT_TOP_K);
    }
}
