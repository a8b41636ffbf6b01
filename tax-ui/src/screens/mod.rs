//! Interactive screens.
//!
//! - `intake` - profile questions, then submission
//! - `workspace` - tab loop over the submitted profile
//! - `upload` - standalone Form 16 upload

mod console;
mod intake;
mod upload;
mod workspace;

pub use console::Console;
pub use intake::run_intake;
pub use upload::run_upload;
pub use workspace::run_workspace;
