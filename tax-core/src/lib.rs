pub mod flows;
pub mod models;
pub mod uploader;

pub use flows::{IntakeError, ProfileIntake, UploadState, UploadWidget, Workspace};
pub use models::*;
pub use uploader::{DocumentUploader, UploadError};
