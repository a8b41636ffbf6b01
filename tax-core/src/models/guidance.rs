use super::EmploymentType;

const COMMON_DOCUMENTS: [&str; 5] = [
    "PAN Card",
    "Aadhaar Card",
    "Bank Account Statements",
    "Form 26AS",
    "Annual Information Statement (AIS)",
];

/// Papers to gather before filing, common ones first.
///
/// Without an employment type (or for `Mixed`) only the common list applies.
pub fn document_checklist(employment: Option<EmploymentType>) -> Vec<&'static str> {
    let specific: &[&str] = match employment {
        Some(EmploymentType::Salaried) => &[
            "Form 16 from employer",
            "Salary certificates",
            "HRA rent receipts and agreement",
            "Investment proofs (80C, 80D, etc.)",
            "Interest certificate from banks",
        ],
        Some(EmploymentType::Freelancer) => &[
            "Professional income receipts",
            "Expense vouchers",
            "TDS certificates from clients",
            "Business registration documents",
        ],
        Some(EmploymentType::Business) => &[
            "Business income statements",
            "Profit & Loss account",
            "Balance sheet",
            "Expense receipts",
            "GST returns",
        ],
        Some(EmploymentType::Rental) => &[
            "Property documents",
            "Rent receipts",
            "Municipal tax receipts",
            "Home loan interest certificate",
            "Property tax receipts",
        ],
        Some(EmploymentType::Investor) => &[
            "Share trading statements",
            "Dividend income certificates",
            "Interest income statements",
            "Capital gains statements",
            "Mutual fund statements",
        ],
        Some(EmploymentType::Mixed) | None => &[],
    };

    COMMON_DOCUMENTS.iter().chain(specific).copied().collect()
}

/// A dated filing obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub date: &'static str,
    pub description: &'static str,
}

/// Advance-tax instalments and the return due date for FY 2025-26.
pub const DEADLINES: [Deadline; 5] = [
    Deadline {
        date: "June 15, 2025",
        description: "Q1 Advance Tax Payment (FY 2025-26)",
    },
    Deadline {
        date: "July 31, 2025",
        description: "ITR Filing Deadline (AY 2025-26)",
    },
    Deadline {
        date: "September 15, 2025",
        description: "Q2 Advance Tax Payment (FY 2025-26)",
    },
    Deadline {
        date: "December 15, 2025",
        description: "Q3 Advance Tax Payment (FY 2025-26)",
    },
    Deadline {
        date: "March 15, 2026",
        description: "Q4 Advance Tax Payment (FY 2025-26)",
    },
];

/// Steps for paying self-assessment or advance tax through Challan 280.
pub const CHALLAN_280_STEPS: [&str; 7] = [
    "Visit the Income Tax e-filing portal",
    "Go to 'e-Pay Tax' section",
    "Select 'Challan No./ITNS 280'",
    "Enter your PAN and select Assessment Year",
    "Choose payment method (Net Banking/Debit Card)",
    "Complete the payment process",
    "Download and save the challan receipt",
];

/// A titled link to the income tax portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalLink {
    pub title: &'static str,
    pub url: &'static str,
}

pub const PORTAL_LINKS: [PortalLink; 4] = [
    PortalLink {
        title: "Income Tax e-filing Portal",
        url: "https://www.incometax.gov.in/iec/foportal",
    },
    PortalLink {
        title: "Form 26AS",
        url: "https://www.incometax.gov.in/iec/foportal/help/form-26as",
    },
    PortalLink {
        title: "Annual Information Statement (AIS)",
        url: "https://www.incometax.gov.in/iec/foportal/help/ais",
    },
    PortalLink {
        title: "TDS Certificate Download",
        url: "https://www.incometax.gov.in/iec/foportal/help/tds-certificates",
    },
];
