//! Text rendering of the document upload widget.

use std::fmt::Write;

use tax_core::{UploadResult, UploadState};

pub const UPLOAD_LABEL: &str = "Upload Form16";
pub const PROCESSING_LABEL: &str = "Processing...";

/// Header, picked file and the upload button with its enabled state.
pub fn render_upload_form(state: &UploadState) -> String {
    let file = state
        .file()
        .map_or("No file selected", |file| file.file_name());
    let label = if state.is_in_flight() {
        PROCESSING_LABEL
    } else {
        UPLOAD_LABEL
    };
    let button = if state.can_upload() {
        format!("[ {label} ]")
    } else {
        format!("[ {label} ] (disabled)")
    };

    format!("Upload Form 16\nFile: {file}\n{button}\n")
}

/// The results block: the full payload pretty-printed, followed by the
/// summary lines when the payload carries a `tax_summary`.
///
/// `None` while no upload has settled.
pub fn render_result(result: &UploadResult) -> Option<String> {
    let payload = result.payload()?;
    let dump = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "Results:");
    let _ = writeln!(out, "{dump}");
    if let Some(summary) = result.tax_summary() {
        let _ = write!(out, "{summary}");
    }
    Some(out)
}

/// Form plus results, as shown after each state change.
pub fn render_upload(state: &UploadState) -> String {
    let mut out = render_upload_form(state);
    if let Some(results) = render_result(state.result()) {
        out.push_str(&results);
    }
    out
}
