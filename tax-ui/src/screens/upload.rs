use std::io::{self, Write};

use tax_core::{DocumentUploader, SelectedFile, UploadWidget};

use crate::views::{render_upload, render_upload_form, upload::PROCESSING_LABEL};

/// Picks `file`, uploads it once, and redraws the widget after each step.
///
/// Returns whether a request was issued.
pub async fn run_upload<U, W>(
    out: &mut W,
    widget: &mut UploadWidget<U>,
    file: SelectedFile,
) -> io::Result<bool>
where
    U: DocumentUploader,
    W: Write,
{
    widget.select_file(file);
    write!(out, "{}", render_upload_form(widget.state()))?;

    if widget.state().can_upload() {
        writeln!(out, "{PROCESSING_LABEL}")?;
        out.flush()?;
    }
    let issued = widget.upload().await;

    write!(out, "\n{}", render_upload(widget.state()))?;
    out.flush()?;
    Ok(issued)
}
