mod document;
mod guidance;
mod profile;
mod tab;

pub use document::{
    FileSelectionError, Savings, SelectedFile, TaxSummaryView, UPLOAD_FAILED, UploadResult,
};
pub use guidance::{
    CHALLAN_280_STEPS, DEADLINES, Deadline, PORTAL_LINKS, PortalLink, document_checklist,
};
pub use profile::{
    AgeGroup, EmploymentType, FiscalYear, ProfileField, ProfileRecord, ResidentialStatus,
    UnknownOption,
};
pub use tab::{Tab, TabView};
