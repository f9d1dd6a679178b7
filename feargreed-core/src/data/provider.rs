//! Sentiment source trait and structured error types.
//!
//! The SentimentSource trait abstracts over where the raw payload comes from
//! (the CNN endpoint in production, a canned body in tests) so the pipeline
//! never touches the network directly.

use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for every stage of the export.
///
/// These are displayable as-is by the CLI; the binary adds context on top.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("remote request failed: HTTP {status} for {url}")]
    RemoteRequest { status: u16, url: String },

    #[error("network unreachable: {0}")]
    Network(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("malformed data point at index {index}: {reason}")]
    MalformedPoint { index: usize, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("config error: {0}")]
    Config(String),
}

impl DataError {
    /// HTTP status carried by a remote rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DataError::RemoteRequest { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Trait for sources of the raw graph-data body.
///
/// Implementations make exactly one attempt; there is no retry layer above.
pub trait SentimentSource {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the raw JSON body for the history starting at `start_date` (YYYY-MM-DD).
    fn fetch(&self, start_date: &str) -> Result<String, DataError>;
}

/// Source that always returns the same body. Useful offline and in tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl SentimentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, _start_date: &str) -> Result<String, DataError> {
        Ok(self.body.clone())
    }
}
