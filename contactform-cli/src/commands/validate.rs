use crate::load_submission;
use anyhow::{Context, Result};
use colored::*;
use contactform_core::{validate_submission, FieldName, ValidationReport};
use tracing::info;

pub fn execute(input: &str, json: bool) -> Result<ValidationReport> {
    info!("Validating submission: {}", input);

    let submission = load_submission(input)?;
    let report = validate_submission(&submission);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize validation report")?;
        println!("{}", out);
        return Ok(report);
    }

    println!("\n=== Validation Results ===");
    for field in FieldName::ALL {
        match report.message(field) {
            Some(message) => println!("{} {:<8} {}", "✗".red(), field, message),
            None => println!("{} {:<8} ok", "✓".green(), field),
        }
    }

    println!("\n=== Summary ===");
    if report.valid {
        println!("{} Submission is valid", "✓".green());
    } else {
        println!(
            "{} {} field(s) need attention",
            "✗".red(),
            report.errors.len()
        );
    }

    Ok(report)
}
