use crate::load_submission;
use anyhow::{Context, Result};
use contactform_core::{ContactForm, FormDocument, SubmitOutcome};
use std::fs;
use tracing::{info, warn};

/// Run one submit attempt and return the rendered form markup
pub fn execute(input: &str, output: Option<&str>) -> Result<String> {
    info!("Submitting form from: {}", input);

    let submission = load_submission(input)?;

    let mut form = ContactForm::new(FormDocument::new());
    form.fill(submission)?;

    match form.submit()? {
        SubmitOutcome::Submitted(response) => info!("{}", response.message),
        SubmitOutcome::Rejected(report) => {
            for (field, issue) in &report.errors {
                warn!("{}: {}", field, issue.message);
            }
        }
    }

    let markup = form.view().to_markup();

    if let Some(output_path) = output {
        fs::write(output_path, &markup)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Rendered form written to: {}", output_path);
    } else {
        print!("{}", markup);
    }

    Ok(markup)
}
