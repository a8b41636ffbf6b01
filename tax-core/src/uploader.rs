use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::SelectedFile;

/// Why an upload did not produce a usable response.
///
/// The upload widget treats every variant the same way; the detail only
/// ends up in the log.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot read '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Sends a picked document to the remote parsing service.
#[async_trait]
pub trait DocumentUploader: Send + Sync {
    /// Performs exactly one request. No retry, no timeout.
    async fn upload(&self, file: &SelectedFile) -> Result<Value, UploadError>;
}
