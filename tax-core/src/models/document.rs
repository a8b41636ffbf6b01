use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde_json::{Value, json};
use thiserror::Error;

/// Message stored in the result whenever an upload fails, whatever the cause.
pub const UPLOAD_FAILED: &str = "Upload failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileSelectionError {
    #[error("'{}' is not an image file", .0.display())]
    NotAnImage(PathBuf),

    #[error("'{}' has no file name", .0.display())]
    NoFileName(PathBuf),
}

/// A document picked for upload. Only image types can be picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    file_name: String,
    mime_type: &'static str,
}

impl SelectedFile {
    /// Accepts `path` if its extension names an image format.
    pub fn image(path: impl Into<PathBuf>) -> Result<Self, FileSelectionError> {
        let path = path.into();
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return Err(FileSelectionError::NoFileName(path)),
        };
        let Some(mime_type) = image_mime_type(&path) else {
            return Err(FileSelectionError::NotAnImage(path));
        };

        Ok(Self {
            path,
            file_name,
            mime_type,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())?;

    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Outcome of the most recent upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadResult {
    #[default]
    Absent,
    /// Response body, stored as received.
    Success(Value),
    Failure,
}

impl UploadResult {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The payload shown to the user: the response body on success,
    /// `{"error": "Upload failed"}` on failure.
    pub fn payload(&self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Success(body) => Some(body.clone()),
            Self::Failure => Some(json!({ "error": UPLOAD_FAILED })),
        }
    }

    /// Summary fields pulled from a success payload, if it has any.
    pub fn tax_summary(&self) -> Option<TaxSummaryView> {
        match self {
            Self::Success(body) => TaxSummaryView::extract(body),
            Self::Absent | Self::Failure => None,
        }
    }
}

/// The three values rendered under a result that carries `tax_summary`.
///
/// Each field is looked up on its own; a missing one is `None` and renders
/// as blank text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxSummaryView {
    pub recommended_regime: Option<String>,
    pub savings: Option<Savings>,
    pub suggestion: Option<String>,
}

/// The `savings` figure: a normalised decimal, or the backend's own number
/// text when it does not fit a [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Savings {
    Amount(Decimal),
    Raw(String),
}

impl fmt::Display for Savings {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

impl TaxSummaryView {
    /// Returns `None` unless `payload.tax_summary` is present and truthy.
    pub fn extract(payload: &Value) -> Option<Self> {
        let summary = payload.get("tax_summary").filter(|v| is_truthy(v))?;

        Some(Self {
            recommended_regime: summary.get("recommended_regime").and_then(text_of),
            savings: summary.get("savings").and_then(savings_of),
            suggestion: payload.get("suggestion").and_then(text_of),
        })
    }
}

impl fmt::Display for TaxSummaryView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Recommended Regime: {}",
            self.recommended_regime.as_deref().unwrap_or_default()
        )?;
        match &self.savings {
            Some(savings) => writeln!(f, "Potential Savings: ₹{savings}")?,
            None => writeln!(f, "Potential Savings: ₹")?,
        }
        writeln!(
            f,
            "Suggestion: {}",
            self.suggestion.as_deref().unwrap_or_default()
        )
    }
}

/// `null`, `false`, `0`, and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parses a JSON number (or numeric string) and strips trailing zeros so
/// `12000.0` prints as `12000`. Numbers beyond `Decimal`'s range keep their
/// JSON text.
fn savings_of(value: &Value) -> Option<Savings> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    match Decimal::from_str(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
        Ok(amount) => Some(Savings::Amount(amount.normalize())),
        Err(_) if value.is_number() => Some(Savings::Raw(raw)),
        Err(_) => None,
    }
}
