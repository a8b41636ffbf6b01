use thiserror::Error;
use tracing::{debug, info};

use crate::models::{ProfileField, ProfileRecord};

use super::Workspace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("profile has already been submitted")]
    ProfileFrozen,
}

/// The profile form followed by the tabbed workspace.
///
/// While editing, each change event merges one key into the record.
/// Submitting freezes the record and opens the workspace on its default tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileIntake {
    Editing(ProfileRecord),
    Submitted(Workspace),
}

impl Default for ProfileIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileIntake {
    /// Starts with an empty record and the form visible.
    pub fn new() -> Self {
        Self::Editing(ProfileRecord::default())
    }

    /// Merges one field into the record.
    ///
    /// # Errors
    /// [`IntakeError::ProfileFrozen`] once the profile has been submitted;
    /// the record is left untouched.
    pub fn update(&mut self, field: ProfileField) -> Result<(), IntakeError> {
        match self {
            Self::Editing(record) => {
                debug!(?field, "profile field changed");
                record.apply(field);
                Ok(())
            }
            Self::Submitted(_) => Err(IntakeError::ProfileFrozen),
        }
    }

    /// Accepts the record as-is, however partial, and reveals the workspace.
    /// Submitting again does nothing.
    pub fn submit(&mut self) {
        if let Self::Editing(record) = self {
            let record = std::mem::take(record);
            info!(fields = record.len(), "profile submitted");
            *self = Self::Submitted(Workspace::new(record));
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// The record as it currently stands, editable or frozen.
    pub fn profile(&self) -> &ProfileRecord {
        match self {
            Self::Editing(record) => record,
            Self::Submitted(workspace) => workspace.profile(),
        }
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Self::Editing(_) => None,
            Self::Submitted(workspace) => Some(workspace),
        }
    }

    pub fn workspace_mut(&mut self) -> Option<&mut Workspace> {
        match self {
            Self::Editing(_) => None,
            Self::Submitted(workspace) => Some(workspace),
        }
    }
}
