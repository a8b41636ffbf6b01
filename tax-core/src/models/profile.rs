use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when text does not name any option of a profile selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

fn parse_label<T: Copy>(
    kind: &'static str,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
    s: &str,
) -> Result<T, UnknownOption> {
    let wanted = s.trim();
    all.iter()
        .find(|v| label(v).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| UnknownOption {
            kind,
            value: s.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "Below 60")]
    Below60,
    #[serde(rename = "60 and above")]
    SixtyAndAbove,
    #[serde(rename = "80 and above")]
    EightyAndAbove,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [Self::Below60, Self::SixtyAndAbove, Self::EightyAndAbove];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Below60 => "Below 60",
            Self::SixtyAndAbove => "60 and above",
            Self::EightyAndAbove => "80 and above",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidentialStatus {
    Resident,
    #[serde(rename = "Non-Resident")]
    NonResident,
}

impl ResidentialStatus {
    pub const ALL: [ResidentialStatus; 2] = [Self::Resident, Self::NonResident];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Resident => "Resident",
            Self::NonResident => "Non-Resident",
        }
    }
}

/// Financial year paired with its assessment year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiscalYear {
    #[serde(rename = "FY 2025-26 / AY 2026-27")]
    Fy2025Ay2026,
}

impl FiscalYear {
    pub const ALL: [FiscalYear; 1] = [Self::Fy2025Ay2026];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fy2025Ay2026 => "FY 2025-26 / AY 2026-27",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    Salaried,
    Freelancer,
    Business,
    Rental,
    Investor,
    Mixed,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 6] = [
        Self::Salaried,
        Self::Freelancer,
        Self::Business,
        Self::Rental,
        Self::Investor,
        Self::Mixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::Freelancer => "Freelancer",
            Self::Business => "Business",
            Self::Rental => "Rental",
            Self::Investor => "Investor",
            Self::Mixed => "Mixed",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("age group", &Self::ALL, Self::label, s)
    }
}

impl FromStr for ResidentialStatus {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("residential status", &Self::ALL, Self::label, s)
    }
}

impl FromStr for FiscalYear {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("fiscal year", &Self::ALL, Self::label, s)
    }
}

impl FromStr for EmploymentType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("employment type", &Self::ALL, Self::label, s)
    }
}

/// A single change event from the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    AgeGroup(AgeGroup),
    ResidentialStatus(ResidentialStatus),
    FiscalYear(FiscalYear),
    EmploymentType(EmploymentType),
}

/// The user's (possibly partial) tax profile.
///
/// Keys that were never touched stay `None` and are left out of the
/// serialized form, so a record with two answers serializes to two keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential_status: Option<ResidentialStatus>,
    #[serde(default, rename = "fyAy", skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<FiscalYear>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
}

impl ProfileRecord {
    /// Overwrites the one key named by `field`; every other key keeps its value.
    pub fn apply(&mut self, field: ProfileField) {
        match field {
            ProfileField::AgeGroup(v) => self.age_group = Some(v),
            ProfileField::ResidentialStatus(v) => self.residential_status = Some(v),
            ProfileField::FiscalYear(v) => self.fiscal_year = Some(v),
            ProfileField::EmploymentType(v) => self.employment_type = Some(v),
        }
    }

    /// Number of keys that have been set.
    pub fn len(&self) -> usize {
        [
            self.age_group.is_some(),
            self.residential_status.is_some(),
            self.fiscal_year.is_some(),
            self.employment_type.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn opt_label(label: Option<&'static str>) -> &'static str {
    label.unwrap_or("—")
}

impl fmt::Display for ProfileRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Age group:          {}",
            opt_label(self.age_group.as_ref().map(AgeGroup::label))
        )?;
        writeln!(
            f,
            "Residential status: {}",
            opt_label(self.residential_status.as_ref().map(ResidentialStatus::label))
        )?;
        writeln!(
            f,
            "FY / AY:            {}",
            opt_label(self.fiscal_year.as_ref().map(FiscalYear::label))
        )?;
        writeln!(
            f,
            "Employment type:    {}",
            opt_label(self.employment_type.as_ref().map(EmploymentType::label))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_touches_only_the_targeted_key() {
        let mut record = ProfileRecord::default();
        record.apply(ProfileField::AgeGroup(AgeGroup::SixtyAndAbove));
        record.apply(ProfileField::EmploymentType(EmploymentType::Rental));
        let before = record.clone();

        record.apply(ProfileField::ResidentialStatus(ResidentialStatus::NonResident));

        assert_eq!(record.age_group, before.age_group);
        assert_eq!(record.employment_type, before.employment_type);
        assert_eq!(record.fiscal_year, None);
        assert_eq!(
            record.residential_status,
            Some(ResidentialStatus::NonResident)
        );
    }

    #[test]
    fn apply_overwrites_a_previous_answer() {
        let mut record = ProfileRecord::default();
        record.apply(ProfileField::AgeGroup(AgeGroup::Below60));
        record.apply(ProfileField::AgeGroup(AgeGroup::EightyAndAbove));
        assert_eq!(record.age_group, Some(AgeGroup::EightyAndAbove));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn empty_record_serializes_to_empty_object() {
        let record = ProfileRecord::default();
        assert!(record.is_empty());
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }

    #[test]
    fn serialized_keys_match_form_field_names() {
        let mut record = ProfileRecord::default();
        record.apply(ProfileField::FiscalYear(FiscalYear::Fy2025Ay2026));
        record.apply(ProfileField::EmploymentType(EmploymentType::Mixed));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "fyAy": "FY 2025-26 / AY 2026-27",
                "employmentType": "Mixed",
            })
        );
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("below 60".parse::<AgeGroup>(), Ok(AgeGroup::Below60));
        assert_eq!(
            " non-resident ".parse::<ResidentialStatus>(),
            Ok(ResidentialStatus::NonResident)
        );
        assert_eq!(
            "FY 2025-26 / AY 2026-27".parse::<FiscalYear>(),
            Ok(FiscalYear::Fy2025Ay2026)
        );
        assert_eq!("INVESTOR".parse::<EmploymentType>(), Ok(EmploymentType::Investor));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Retired".parse::<EmploymentType>().unwrap_err();
        assert_eq!(err.kind, "employment type");
        assert_eq!(err.to_string(), "unknown employment type 'Retired'");
    }

    #[test]
    fn display_marks_unset_fields() {
        let mut record = ProfileRecord::default();
        record.apply(ProfileField::ResidentialStatus(ResidentialStatus::Resident));
        let text = record.to_string();
        assert!(text.contains("Residential status: Resident"));
        assert!(text.contains("Age group:          —"));
    }
}
