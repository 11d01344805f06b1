//! Submission endpoint seam
//!
//! A real backend is not part of this crate. `SimulatedEndpoint` stands in
//! for it and never lets data leave the process.

use crate::constants::CONFIRMATION_MESSAGE;
use crate::types::ContactSubmission;
use crate::Result;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::info;

/// Response returned by a submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the submission was accepted
    pub success: bool,

    /// Message to show the sender
    pub message: String,
}

/// Receives validated submissions
pub trait SubmissionEndpoint {
    /// Deliver a submission that already passed validation
    fn submit(&mut self, submission: &ContactSubmission) -> Result<ContactResponse>;
}

/// Endpoint that accepts everything and keeps nothing but a counter
#[derive(Debug, Clone, Default)]
pub struct SimulatedEndpoint {
    accepted: usize,
}

impl SimulatedEndpoint {
    /// Create a new simulated endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions accepted so far
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl SubmissionEndpoint for SimulatedEndpoint {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<ContactResponse> {
        #[cfg(feature = "logging")]
        info!("Contact form submission from {}", submission.email);
        #[cfg(not(feature = "logging"))]
        let _ = submission;

        self.accepted += 1;

        Ok(ContactResponse {
            success: true,
            message: CONFIRMATION_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_endpoint_accepts() {
        let mut endpoint = SimulatedEndpoint::new();
        let response = endpoint
            .submit(&ContactSubmission::new("Jo", "jo@example.com", "hi"))
            .unwrap();

        assert!(response.success);
        assert!(response.message.starts_with("Thank you for your message"));
        assert_eq!(endpoint.accepted(), 1);
    }
}
