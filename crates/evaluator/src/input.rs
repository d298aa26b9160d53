use colored::*;
use models::ValidationResult;
use std::path::Path;
use validators::format_path;

use crate::CommandError;

pub const VALID_MESSAGE: &str = "Your JSON file is valid!";

const ERROR_PREFIX: &str = "Error:";

/// Report lines for `validate_input`, one entry per error (each spanning two
/// lines) or the success message.
pub fn render_input_report(result: &ValidationResult) -> Vec<String> {
    if result.is_valid {
        return vec![VALID_MESSAGE.to_string()];
    }

    result
        .issues
        .iter()
        .map(|issue| {
            format!(
                "{} {}\n  at {}",
                ERROR_PREFIX,
                issue.message,
                format_path(&issue.path)
            )
        })
        .collect()
}

/// Terminal form of a report line: the `Error:` prefix in red, the success
/// message in green.
fn colorize(line: &str) -> String {
    match line.strip_prefix(ERROR_PREFIX) {
        Some(rest) => format!("{}{}", ERROR_PREFIX.red(), rest),
        None => line.green().to_string(),
    }
}

pub fn print_input_report(result: &ValidationResult) {
    for line in render_input_report(result) {
        println!("{}", colorize(&line));
    }
}

/// Validate `json_path` against `schema_path` and print the report to stdout.
///
/// Schema violations are part of the report, not an `Err`.
pub fn validate_input(
    json_path: &Path,
    schema_path: &Path,
) -> Result<ValidationResult, CommandError> {
    let result = parser::validate_json(json_path, schema_path)?;
    print_input_report(&result);
    Ok(result)
}
