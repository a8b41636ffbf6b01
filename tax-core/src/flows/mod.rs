//! State machines behind the two front-end flows.
//!
//! - `intake` - profile form, then the tabbed workspace
//! - `workspace` - tab selection and view dispatch
//! - `upload` - document upload widget

mod intake;
mod upload;
mod workspace;

pub use intake::{IntakeError, ProfileIntake};
pub use upload::{InFlight, UploadState, UploadWidget};
pub use workspace::{TabController, Workspace};
