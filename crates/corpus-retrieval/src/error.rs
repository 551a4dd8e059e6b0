use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by corpus loading and similarity search
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file is missing or unreadable
    #[error("failed to read corpus file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus is not valid structured data or a record is missing a
    /// required field
    #[error("malformed corpus: {0}")]
    Malformed(String),

    /// A caller-supplied argument is unusable for this call
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Search was attempted against a corpus with zero loaded chunks
    #[error("search attempted against an empty corpus")]
    EmptyCorpus,
}
