//! Core types for contact form fields

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// One of the three inputs on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    /// Sender's name
    Name,
    /// Sender's email address
    Email,
    /// Free-text message body
    Message,
}

impl FieldName {
    /// All fields in the order they appear on the form
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// Wire name, also used as the input's `id` and `name` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    /// Look up a field by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named input with its current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Input name as submitted
    pub name: String,

    /// Current value, untrimmed
    pub value: String,
}

impl Field {
    /// Create a new field
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The values of one form instance, keyed by field
///
/// Missing fields deserialize as empty strings so validation stays total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    /// Sender's name
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Message body
    pub message: String,
}

impl ContactSubmission {
    /// Create a submission from the three values
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Collect a submission from `{name, value}` pairs
    ///
    /// Unknown names are ignored, absent fields stay empty and the last
    /// value of a repeated name wins.
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut submission = Self::default();

        for field in fields {
            match FieldName::parse(&field.name) {
                Some(name) => submission.set(name, field.value.clone()),
                None => {
                    #[cfg(feature = "logging")]
                    debug!("Ignoring unknown field {:?}", field.name);
                }
            }
        }

        submission
    }

    /// Current value of a field
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Flatten into `{name, value}` pairs in form order
    pub fn fields(&self) -> Vec<Field> {
        FieldName::ALL
            .iter()
            .map(|f| Field::new(f.as_str(), self.value(*f)))
            .collect()
    }
}
