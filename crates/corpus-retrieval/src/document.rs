use serde::{Deserialize, Serialize};

/// One retrievable unit of regulatory text with its citation metadata.
///
/// Chunks are immutable once loaded; each corpus article is one chunk and is
/// never split further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryChunk {
    pub text: String,
    pub article_number: u32,
    pub source: String,
}

/// Wire format of one corpus record. Unknown fields are ignored; a missing
/// required field fails deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct CorpusRecord {
    pub content: String,
    pub article_number: u32,
    pub source: String,
}

impl From<CorpusRecord> for RegulatoryChunk {
    fn from(record: CorpusRecord) -> Self {
        Self {
            text: record.content,
            article_number: record.article_number,
            source: record.source,
        }
    }
}
