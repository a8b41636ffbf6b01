use std::str::FromStr;

/// Resolves an answer to one of `options`.
///
/// Accepts the 1-based number shown next to an option, or anything the
/// option type parses from (its label). Leading and trailing whitespace is
/// ignored.
pub fn parse_choice<T>(
    input: &str,
    options: &[T],
) -> Option<T>
where
    T: Copy + PartialEq + FromStr,
{
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    trimmed
        .parse::<T>()
        .ok()
        .filter(|choice| options.contains(choice))
}

/// Renders `options` as an indented, numbered list.
pub fn numbered_list(labels: impl IntoIterator<Item = &'static str>) -> String {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| format!("  {}) {label}\n", i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tax_core::{AgeGroup, EmploymentType, ResidentialStatus};

    #[test]
    fn parse_choice_accepts_position() {
        assert_eq!(
            parse_choice("2", &ResidentialStatus::ALL),
            Some(ResidentialStatus::NonResident)
        );
        assert_eq!(parse_choice(" 6 ", &EmploymentType::ALL), Some(EmploymentType::Mixed));
    }

    #[test]
    fn parse_choice_accepts_label() {
        assert_eq!(
            parse_choice("80 and above", &AgeGroup::ALL),
            Some(AgeGroup::EightyAndAbove)
        );
    }

    #[test]
    fn parse_choice_rejects_out_of_range_and_unknown() {
        assert_eq!(parse_choice("0", &AgeGroup::ALL), None);
        assert_eq!(parse_choice("4", &AgeGroup::ALL), None);
        assert_eq!(parse_choice("Teenager", &AgeGroup::ALL), None);
    }

    #[test]
    fn parse_choice_respects_restricted_option_lists() {
        let only_salaried = [EmploymentType::Salaried];
        assert_eq!(parse_choice("Business", &only_salaried), None);
    }

    #[test]
    fn numbered_list_counts_from_one() {
        assert_eq!(
            numbered_list(ResidentialStatus::ALL.iter().map(ResidentialStatus::label)),
            "  1) Resident\n  2) Non-Resident\n"
        );
    }
}
