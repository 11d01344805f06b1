use crate::read_input;
use anyhow::{Context, Result};
use colored::*;
use contactform_core::{validate_submission, ContactSubmission, FieldName, ValidationReport};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use tracing::{debug, info};

/// Totals over a batch of submissions
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Submissions read
    pub total: usize,
    /// Submissions that passed
    pub valid: usize,
    /// Submissions that failed
    pub invalid: usize,
    /// How often each field failed
    pub failures: BTreeMap<FieldName, usize>,
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    stats: &'a BatchStats,
    reports: Vec<LineReport<'a>>,
}

#[derive(Serialize)]
struct LineReport<'a> {
    line: usize,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Validate one flat submission per line of a JSONL file
pub fn execute(input: &str, output: Option<&str>, progress: bool) -> Result<BatchStats> {
    info!("Validating batch: {}", input);

    let content = read_input(input)?;
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    let pb = if progress {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(pb)
    } else {
        None
    };

    let mut stats = BatchStats::default();
    let mut reports = Vec::with_capacity(lines.len());

    for (line_no, line) in &lines {
        let submission: ContactSubmission = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse submission on line {}", line_no))?;

        let report = validate_submission(&submission);
        debug!("Line {}: valid={}", line_no, report.valid);

        stats.total += 1;
        if report.valid {
            stats.valid += 1;
        } else {
            stats.invalid += 1;
        }
        for field in report.errors.keys() {
            *stats.failures.entry(*field).or_insert(0) += 1;
        }

        reports.push((*line_no, report));

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    println!("\n=== Batch Results ===");
    println!("Submissions:        {}", stats.total);
    println!("Valid:              {}", stats.valid.to_string().green());
    if stats.invalid > 0 {
        println!("Invalid:            {}", stats.invalid.to_string().red());
    } else {
        println!("Invalid:            {}", stats.invalid);
    }
    for (field, count) in &stats.failures {
        println!("  {:<8} failed:  {}", field, count);
    }

    if let Some(output_path) = output {
        let out = BatchOutput {
            stats: &stats,
            reports: reports
                .iter()
                .map(|(line, report)| LineReport { line: *line, report })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&out)
            .with_context(|| "Failed to serialize batch reports")?;
        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Batch reports written to: {}", output_path);
    }

    Ok(stats)
}
