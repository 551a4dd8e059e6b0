//! In-memory document store for the regulatory corpus.
//!
//! The corpus is loaded once at startup from a JSON array of records and is
//! read-only thereafter. At the scale this system targets (tens to low
//! hundreds of articles) no index or persistence layer is warranted.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::document::{CorpusRecord, RegulatoryChunk};
use crate::error::CorpusError;

/// Owns the loaded regulatory chunks for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    chunks: Vec<RegulatoryChunk>,
}

impl DocumentStore {
    /// Load the corpus from a JSON file.
    ///
    /// The file must hold an array of objects with `content`,
    /// `article_number` and `source` fields. Extra fields are ignored; a
    /// missing required field or unparseable JSON is a
    /// [`CorpusError::Malformed`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<CorpusRecord> =
            serde_json::from_str(&raw).map_err(|e| CorpusError::Malformed(e.to_string()))?;

        let chunks: Vec<RegulatoryChunk> = records.into_iter().map(Into::into).collect();
        info!(count = chunks.len(), path = %path.display(), "loaded regulatory corpus");

        Ok(Self { chunks })
    }

    /// Build a store from already-constructed chunks.
    pub fn from_chunks(chunks: Vec<RegulatoryChunk>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[RegulatoryChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
