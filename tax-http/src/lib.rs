//! HTTP transport for the document upload widget.
//!
//! Talks to the tax assistant backend:
//!
//! | Method | Path             | Use                          |
//! |--------|------------------|------------------------------|
//! | POST   | `/upload/form16` | multipart upload, JSON reply |
//! | GET    | `/`              | readiness message            |

pub mod client;
pub mod endpoint;

pub use client::{FILE_FIELD, HttpUploader};
pub use endpoint::{DEFAULT_BASE_URL, EndpointError, UPLOAD_PATH, UploadEndpoint};
