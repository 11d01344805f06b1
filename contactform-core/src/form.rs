//! Lifecycle of one contact form instance
//!
//! ```text
//! Pristine --submit--> Validated{valid: false} --submit--> ...
//!     \                        |
//!      `--submit--> Validated{valid: true} --endpoint ok--> Submitted
//! ```
//!
//! `Submitted` is terminal: the form content has been replaced by the
//! confirmation, so there is nothing left to edit or submit.

use crate::endpoint::{ContactResponse, SimulatedEndpoint, SubmissionEndpoint};
use crate::error::FormError;
use crate::render::{self, FormView};
use crate::types::{ContactSubmission, FieldName};
use crate::validator::{validate_submission, ValidationReport};
use crate::Result;
use alloc::string::String;

#[cfg(feature = "logging")]
use tracing::{debug, info};

/// Where a form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No submit attempted yet
    Pristine,
    /// At least one submit attempted; carries the latest verdict
    Validated {
        /// Aggregate verdict of the latest attempt
        valid: bool,
    },
    /// Submission delivered and confirmation shown
    Submitted,
}

/// Result of a submit attempt that did not fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; annotations were rendered
    Rejected(ValidationReport),
    /// Validation passed and the endpoint accepted the submission
    Submitted(ContactResponse),
}

/// A contact form bound to a view and a submission endpoint
#[derive(Debug)]
pub struct ContactForm<V: FormView, E: SubmissionEndpoint = SimulatedEndpoint> {
    view: V,
    endpoint: E,
    values: ContactSubmission,
    phase: FormPhase,
    attempts: u32,
}

impl<V: FormView> ContactForm<V, SimulatedEndpoint> {
    /// Create a form whose submissions go to the simulated endpoint
    pub fn new(view: V) -> Self {
        Self::with_endpoint(view, SimulatedEndpoint::new())
    }
}

impl<V: FormView, E: SubmissionEndpoint> ContactForm<V, E> {
    /// Create a form with a custom endpoint
    ///
    /// Field values start from whatever the view's inputs already hold.
    pub fn with_endpoint(view: V, endpoint: E) -> Self {
        let mut values = ContactSubmission::default();
        for field in FieldName::ALL {
            if let Some(value) = view.value(field) {
                values.set(field, value);
            }
        }

        Self {
            view,
            endpoint,
            values,
            phase: FormPhase::Pristine,
            attempts: 0,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Number of submit attempts made
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Current field values
    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    /// The bound view
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The bound endpoint
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Release the view
    pub fn into_view(self) -> V {
        self.view
    }

    /// Edit one field. Does not validate.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) -> Result<()> {
        if self.phase == FormPhase::Submitted {
            return Err(FormError::AlreadySubmitted);
        }

        let value = value.into();
        self.view.show_value(field, &value);
        self.values.set(field, value);
        Ok(())
    }

    /// Replace all field values. Does not validate.
    pub fn fill(&mut self, submission: ContactSubmission) -> Result<()> {
        for field in FieldName::ALL {
            self.set_value(field, submission.value(field))?;
        }
        Ok(())
    }

    /// Run one submit attempt
    ///
    /// Validates every field, renders annotations, and on success hands the
    /// submission to the endpoint and shows its confirmation. An endpoint
    /// failure leaves the form in `Validated { valid: true }` so it can be
    /// retried.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.phase == FormPhase::Submitted {
            return Err(FormError::AlreadySubmitted);
        }

        self.attempts += 1;
        let report = validate_submission(&self.values);
        render::apply(&report, &mut self.view);
        self.phase = FormPhase::Validated {
            valid: report.valid,
        };

        if !report.valid {
            #[cfg(feature = "logging")]
            debug!(
                "Submit attempt {} rejected ({} fields failed)",
                self.attempts,
                report.errors.len()
            );
            return Ok(SubmitOutcome::Rejected(report));
        }

        let response = self.endpoint.submit(&self.values)?;
        if !response.success {
            return Err(FormError::Endpoint(response.message));
        }

        self.view.show_confirmation(&response.message);
        self.phase = FormPhase::Submitted;

        #[cfg(feature = "logging")]
        info!("Contact form submitted after {} attempt(s)", self.attempts);

        Ok(SubmitOutcome::Submitted(response))
    }
}
