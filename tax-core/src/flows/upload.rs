use serde_json::Value;
use tracing::{debug, error, info};

use crate::models::{SelectedFile, UploadResult};
use crate::uploader::{DocumentUploader, UploadError};

/// The picked file, the in-flight flag and the latest result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    file: Option<SelectedFile>,
    in_flight: bool,
    result: UploadResult,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn result(&self) -> &UploadResult {
        &self.result
    }

    /// Replaces the current selection. The previous result stays on screen
    /// until the next upload settles.
    pub fn select_file(&mut self, file: SelectedFile) {
        debug!(file = file.file_name(), "file selected");
        self.file = Some(file);
    }

    /// True when a file is picked and no upload is running.
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.in_flight
    }

    /// Raises the in-flight flag for the picked file.
    ///
    /// Returns `None`, changing nothing, when [`can_upload`](Self::can_upload)
    /// is false. The flag drops again when the returned guard goes away.
    pub fn begin_upload(&mut self) -> Option<InFlight<'_>> {
        if !self.can_upload() {
            return None;
        }
        let file = self.file.clone()?;
        self.in_flight = true;
        Some(InFlight { state: self, file })
    }
}

/// Holds the in-flight flag for one upload.
///
/// The flag is cleared when the guard is dropped: after [`settle`](Self::settle),
/// on an early return, or when the awaiting future is cancelled.
#[derive(Debug)]
pub struct InFlight<'a> {
    state: &'a mut UploadState,
    file: SelectedFile,
}

impl InFlight<'_> {
    /// The file captured when the upload started.
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    /// Records the outcome. Every error becomes the same failure result.
    pub fn settle(
        self,
        outcome: Result<Value, UploadError>,
    ) {
        self.state.result = match outcome {
            Ok(body) => {
                info!(file = self.file.file_name(), "upload succeeded");
                UploadResult::Success(body)
            }
            Err(err) => {
                error!(file = self.file.file_name(), error = %err, "upload failed");
                UploadResult::Failure
            }
        };
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.in_flight = false;
    }
}

/// The document upload widget: an [`UploadState`] wired to an uploader.
pub struct UploadWidget<U> {
    state: UploadState,
    uploader: U,
}

impl<U: DocumentUploader> UploadWidget<U> {
    pub fn new(uploader: U) -> Self {
        Self {
            state: UploadState::new(),
            uploader,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.state.select_file(file);
    }

    /// Uploads the picked file once.
    ///
    /// Returns `false` without contacting the uploader when there is no
    /// file or an upload is already running.
    pub async fn upload(&mut self) -> bool {
        let Some(in_flight) = self.state.begin_upload() else {
            debug!("upload ignored: no file selected or upload in flight");
            return false;
        };
        let outcome = self.uploader.upload(in_flight.file()).await;
        in_flight.settle(outcome);
        true
    }
}
