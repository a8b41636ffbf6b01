//! Runtime configuration.
//!
//! Values come from three places, later ones winning:
//! 1. built-in defaults
//! 2. an optional TOML file (`--config`)
//! 3. command-line flags
//!
//! ```toml
//! [upload]
//! backend_url = "http://localhost:8000"
//!
//! [logging]
//! level = "info"
//! file = "tax-assistant.log"
//! console = true
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tax_http::{DEFAULT_BASE_URL, EndpointError, UploadEndpoint};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Backend root; the upload route is resolved against it.
    pub backend_url: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub level: String,
    /// Append log records to this file as well.
    pub file: Option<PathBuf>,
    /// Write log records to stderr.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

/// Flag values that replace whatever the file or defaults say.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend_url: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
}

impl AppConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults when `path` is `None`, otherwise the parsed file.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn with_overrides(
        mut self,
        overrides: Overrides,
    ) -> Self {
        if let Some(url) = overrides.backend_url {
            self.upload.backend_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.log_file.is_some() {
            self.logging.file = overrides.log_file;
        }
        if overrides.quiet {
            self.logging.console = false;
        }
        self
    }

    pub fn endpoint(&self) -> Result<UploadEndpoint, ConfigError> {
        Ok(UploadEndpoint::parse(&self.upload.backend_url)?)
    }
}
