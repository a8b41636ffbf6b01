use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::Result;
use tax_core::{
    AgeGroup, EmploymentType, FiscalYear, ProfileField, ProfileIntake, ResidentialStatus,
};
use tracing::debug;

use super::Console;
use crate::{
    utils::{numbered_list, parse_choice},
    views::tab_bar::{build_hint_line, hints},
};

enum Answer<T> {
    Picked(T),
    Skipped,
    Closed,
}

/// Asks one question until the answer names an option, is empty, or input ends.
fn ask<T, R, W>(
    console: &mut Console<R, W>,
    title: &str,
    options: &[T],
    label: fn(&T) -> &'static str,
) -> std::io::Result<Answer<T>>
where
    T: Copy + PartialEq + FromStr,
    R: BufRead,
    W: Write,
{
    console.write(&format!(
        "\n{title}\n{}",
        numbered_list(options.iter().map(label))
    ))?;
    loop {
        let Some(input) = console.prompt("> ")? else {
            return Ok(Answer::Closed);
        };
        if input.is_empty() {
            return Ok(Answer::Skipped);
        }
        match parse_choice(&input, options) {
            Some(choice) => return Ok(Answer::Picked(choice)),
            None => console.write(&format!("'{input}' is not one of the options\n"))?,
        }
    }
}

/// Runs the profile form and submits it.
///
/// Unanswered questions leave their key unset; closing input early submits
/// whatever was answered so far.
pub fn run_intake<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    intake: &mut ProfileIntake,
) -> Result<()> {
    console.write(&format!(
        "Personal Information\n{}\n",
        build_hint_line(&[hints::SKIP])
    ))?;

    for step in 0..4 {
        let answer = match step {
            0 => map_answer(
                ask(console, "Select Age Group", &AgeGroup::ALL, AgeGroup::label)?,
                ProfileField::AgeGroup,
            ),
            1 => map_answer(
                ask(
                    console,
                    "Residential Status",
                    &ResidentialStatus::ALL,
                    ResidentialStatus::label,
                )?,
                ProfileField::ResidentialStatus,
            ),
            2 => map_answer(
                ask(
                    console,
                    "Financial Year / Assessment Year",
                    &FiscalYear::ALL,
                    FiscalYear::label,
                )?,
                ProfileField::FiscalYear,
            ),
            _ => map_answer(
                ask(
                    console,
                    "Employment Type",
                    &EmploymentType::ALL,
                    EmploymentType::label,
                )?,
                ProfileField::EmploymentType,
            ),
        };

        match answer {
            Answer::Picked(field) => intake.update(field)?,
            Answer::Skipped => {}
            Answer::Closed => {
                debug!("input closed during intake");
                break;
            }
        }
    }

    intake.submit();
    console.write("\nProfile submitted.\n\n")?;
    Ok(())
}

fn map_answer<T>(
    answer: Answer<T>,
    field: fn(T) -> ProfileField,
) -> Answer<ProfileField> {
    match answer {
        Answer::Picked(value) => Answer::Picked(field(value)),
        Answer::Skipped => Answer::Skipped,
        Answer::Closed => Answer::Closed,
    }
}
