use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use tax_core::{DocumentUploader, SelectedFile, UploadError};
use tracing::debug;

use crate::endpoint::UploadEndpoint;

/// Multipart field the backend reads the document from.
pub const FILE_FIELD: &str = "file";

/// Body of the backend's root route.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}

/// [`DocumentUploader`] backed by `reqwest`.
///
/// Sends no auth headers and sets no timeout; a request runs until the
/// server answers or the connection drops.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    http: reqwest::Client,
    endpoint: UploadEndpoint,
}

impl HttpUploader {
    pub fn new(endpoint: UploadEndpoint) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &UploadEndpoint {
        &self.endpoint
    }

    /// Asks the backend root route whether it is up and returns its message.
    pub async fn health(&self) -> Result<String, UploadError> {
        let url = self.endpoint.base_url().clone();
        debug!(%url, "probing backend");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status(status.as_u16()));
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
        Ok(body.message)
    }
}

#[async_trait]
impl DocumentUploader for HttpUploader {
    async fn upload(&self, file: &SelectedFile) -> Result<Value, UploadError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|source| UploadError::Io {
                file: file.path().display().to_string(),
                source,
            })?;

        let part = Part::bytes(bytes)
            .file_name(file.file_name().to_string())
            .mime_str(file.mime_type())
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.endpoint.upload_url().clone();
        debug!(%url, file = file.file_name(), "posting document");

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))
    }
}
