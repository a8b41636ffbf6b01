use url::Url;
use thiserror::Error;

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Route that accepts Form 16 scans.
pub const UPLOAD_PATH: &str = "/upload/form16";

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid backend URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Backend address plus the resolved upload route.
///
/// | field        | example                                |
/// |--------------|----------------------------------------|
/// | `base_url`   | `http://localhost:8000/`               |
/// | `upload_url` | `http://localhost:8000/upload/form16`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEndpoint {
    base_url: Url,
    upload_url: Url,
}

impl UploadEndpoint {
    /// Parses `base` and resolves the upload route against it.
    ///
    /// A path on `base` is kept: `http://gw/tax-api` uploads to
    /// `http://gw/tax-api/upload/form16`.
    ///
    /// # Errors
    /// [`EndpointError::InvalidUrl`] when `base` is not an absolute URL.
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let invalid = |source| EndpointError::InvalidUrl {
            input: base.to_string(),
            source,
        };
        let mut base_url = Url::parse(base.trim()).map_err(invalid)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let upload_url = base_url
            .join(UPLOAD_PATH.trim_start_matches('/'))
            .map_err(invalid)?;

        Ok(Self {
            base_url,
            upload_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }
}
