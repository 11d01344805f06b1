//! Library entry for contactform-cli used by integration tests and embedding.

pub mod commands;

use anyhow::{Context, Result};
use contactform_core::{ContactSubmission, Field};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

/// Accepted shapes of a single submission on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SubmissionInput {
    /// `[{"name": "email", "value": "jo@example.com"}, ...]`
    Fields(Vec<Field>),
    /// `{"name": "Jo", "email": "jo@example.com", "message": "hi"}`
    Flat(ContactSubmission),
}

impl SubmissionInput {
    /// Normalize into a flat submission
    pub fn into_submission(self) -> ContactSubmission {
        match self {
            SubmissionInput::Fields(fields) => ContactSubmission::from_fields(&fields),
            SubmissionInput::Flat(submission) => submission,
        }
    }
}

/// Read a file, or stdin when `input` is `-`
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Read and parse one submission in either accepted shape
pub fn load_submission(input: &str) -> Result<ContactSubmission> {
    let content = read_input(input)?;
    let parsed: SubmissionInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse submission JSON: {}", input))?;
    Ok(parsed.into_submission())
}

// Re-export commonly used items
pub use crate::commands::{batch, submit, validate};
