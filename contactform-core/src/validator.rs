//! Pure form validation

use crate::error::FieldError;
use crate::rules::first_failure;
use crate::types::{ContactSubmission, Field, FieldName};
use alloc::collections::BTreeMap;
use serde::{Serialize, Serializer};

#[cfg(feature = "logging")]
use tracing::debug;

/// A failed verdict for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Which rule failed
    pub kind: FieldError,

    /// The failing rule's message
    pub message: &'static str,
}

/// Outcome of one validation pass
///
/// Serializes as `{"valid": bool, "errors": {field: message}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Logical AND of every field verdict
    pub valid: bool,

    /// Failing fields and why they failed
    #[serde(serialize_with = "serialize_messages")]
    pub errors: BTreeMap<FieldName, FieldIssue>,
}

impl ValidationReport {
    /// Whether `field` passed
    pub fn passed(&self, field: FieldName) -> bool {
        !self.errors.contains_key(&field)
    }

    /// Failure kind for `field`, if it failed
    pub fn kind(&self, field: FieldName) -> Option<FieldError> {
        self.errors.get(&field).map(|issue| issue.kind)
    }

    /// Failure message for `field`, if it failed
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).map(|issue| issue.message)
    }

    /// Field to message mapping
    pub fn messages(&self) -> BTreeMap<FieldName, &'static str> {
        self.errors
            .iter()
            .map(|(field, issue)| (*field, issue.message))
            .collect()
    }
}

fn serialize_messages<S: Serializer>(
    errors: &BTreeMap<FieldName, FieldIssue>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(errors.iter().map(|(field, issue)| (field, issue.message)))
}

/// Validate a set of `{name, value}` pairs
///
/// Every known field is evaluated exactly once. Absent fields count as empty
/// and unknown names are ignored.
pub fn validate(fields: &[Field]) -> ValidationReport {
    validate_submission(&ContactSubmission::from_fields(fields))
}

/// Validate a flat submission
pub fn validate_submission(submission: &ContactSubmission) -> ValidationReport {
    let mut errors = BTreeMap::new();

    for field in FieldName::ALL {
        if let Some(rule) = first_failure(field, submission.value(field)) {
            errors.insert(
                field,
                FieldIssue {
                    kind: rule.kind,
                    message: rule.message,
                },
            );
        }
    }

    let report = ValidationReport {
        valid: errors.is_empty(),
        errors,
    };

    #[cfg(feature = "logging")]
    debug!(
        "Validated submission: valid={}, failing fields={}",
        report.valid,
        report.errors.len()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMAIL_INVALID_MESSAGE, NAME_REQUIRED_MESSAGE};
    use alloc::vec;

    #[test]
    fn test_blank_name_only() {
        let report = validate_submission(&ContactSubmission::new("", "a@b.com", "hi"));

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.message(FieldName::Name), Some(NAME_REQUIRED_MESSAGE));
        assert_eq!(report.kind(FieldName::Name), Some(FieldError::Required));
    }

    #[test]
    fn test_bad_email_only() {
        let report = validate_submission(&ContactSubmission::new("Jo", "not-an-email", "hi"));

        assert!(!report.valid);
        assert_eq!(report.messages().len(), 1);
        assert_eq!(report.message(FieldName::Email), Some(EMAIL_INVALID_MESSAGE));
        assert!(report.passed(FieldName::Name));
    }

    #[test]
    fn test_all_fields_fail_independently() {
        let report = validate(&[]);

        assert!(!report.valid);
        for field in FieldName::ALL {
            assert_eq!(report.kind(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_valid_submission() {
        let report = validate(&vec![
            Field::new("name", "Jo"),
            Field::new("email", "jo@example.com"),
            Field::new("message", "hi"),
        ]);

        assert!(report.valid);
        assert!(report.errors.is_empty());
    }
}
