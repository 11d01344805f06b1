//! # Contact Form Core
//!
//! Validation and error-state rendering for the SimpleWeb contact form.
//!
//! ## Modules
//!
//! - `constants`: User-facing messages and markup class names
//! - `types`: Core types (FieldName, Field, ContactSubmission)
//! - `error`: Field verdict kinds and lifecycle errors
//! - `rules`: Per-field validation rules and the email shape check
//! - `validator`: The pure `validate` function and its report
//! - `render`: The `FormView` seam and the rendering adapter
//! - `document`: In-memory form document that renders to HTML markup
//! - `endpoint`: Submission endpoint trait and the simulated stub
//! - `form`: Pristine/Validated/Submitted lifecycle of one form instance

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod document;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod render;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use document::FormDocument;
pub use endpoint::{ContactResponse, SimulatedEndpoint, SubmissionEndpoint};
pub use error::{FieldError, FormError};
pub use form::{ContactForm, FormPhase, SubmitOutcome};
pub use render::FormView;
pub use types::{ContactSubmission, Field, FieldName};
pub use validator::{validate, validate_submission, ValidationReport};

/// Result type alias for contact form operations
pub type Result<T> = core::result::Result<T, FormError>;
