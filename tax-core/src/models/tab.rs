use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{ProfileRecord, UnknownOption};

/// The workspace views, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Profile,
    #[serde(rename = "Income Details")]
    IncomeDetails,
    #[serde(rename = "Tax Calculation")]
    TaxCalculation,
    Reports,
    Guidance,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Profile,
        Self::IncomeDetails,
        Self::TaxCalculation,
        Self::Reports,
        Self::Guidance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::IncomeDetails => "Income Details",
            Self::TaxCalculation => "Tax Calculation",
            Self::Reports => "Reports",
            Self::Guidance => "Guidance",
        }
    }

    /// 1-based position in the tab bar.
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|t| t == self)
            .map_or(0, |i| i + 1)
    }

    /// Picks the view for this tab. Views that need the profile get it;
    /// the others are rendered without it.
    pub fn view(self, profile: &ProfileRecord) -> TabView<'_> {
        match self {
            Self::Profile => TabView::Profile(profile),
            Self::IncomeDetails => TabView::IncomeDetails,
            Self::TaxCalculation => TabView::TaxCalculation(profile),
            Self::Reports => TabView::Reports,
            Self::Guidance => TabView::Guidance(profile),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a tab label (any case) or its 1-based position.
impl FromStr for Tab {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(n) = wanted.parse::<usize>() {
            if let Some(tab) = n.checked_sub(1).and_then(|i| Self::ALL.get(i)) {
                return Ok(*tab);
            }
        }
        Self::ALL
            .iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| UnknownOption {
                kind: "tab",
                value: s.to_string(),
            })
    }
}

/// The view a tab dispatches to, carrying its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabView<'a> {
    Profile(&'a ProfileRecord),
    IncomeDetails,
    TaxCalculation(&'a ProfileRecord),
    Reports,
    Guidance(&'a ProfileRecord),
}

impl TabView<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            Self::Profile(_) => Tab::Profile,
            Self::IncomeDetails => Tab::IncomeDetails,
            Self::TaxCalculation(_) => Tab::TaxCalculation,
            Self::Reports => Tab::Reports,
            Self::Guidance(_) => Tab::Guidance,
        }
    }
}
