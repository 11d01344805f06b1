//! In-memory contact form document
//!
//! Mirrors the structure of the site's contact form: one group per field
//! holding the input, its invalid mark and at most one annotation. A
//! confirmation replaces all groups once the form is submitted.

use crate::constants::{
    ERROR_MESSAGE_CLASS, FORM_CLASS, FORM_GROUP_CLASS, INVALID_CLASS, SUCCESS_MESSAGE_CLASS,
};
use crate::render::FormView;
use crate::types::{ContactSubmission, FieldName};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

/// One input and its error-display slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormGroup {
    /// Which field this group holds
    pub field: FieldName,

    /// Current input value
    pub value: String,

    /// Whether the input carries the invalid mark
    pub invalid: bool,

    /// Error annotation shown below the input
    pub annotation: Option<String>,
}

impl FormGroup {
    fn new(field: FieldName) -> Self {
        Self {
            field,
            value: String::new(),
            invalid: false,
            annotation: None,
        }
    }
}

/// A contact form that renders to HTML markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    groups: Vec<FormGroup>,
    confirmation: Option<String>,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument {
    /// Create a pristine form with empty inputs
    pub fn new() -> Self {
        Self {
            groups: FieldName::ALL.into_iter().map(FormGroup::new).collect(),
            confirmation: None,
        }
    }

    /// Create a form pre-filled from a submission
    pub fn with_values(submission: &ContactSubmission) -> Self {
        let mut doc = Self::new();
        for group in &mut doc.groups {
            group.value = submission.value(group.field).to_string();
        }
        doc
    }

    /// The group for `field`, or `None` once the form was replaced
    pub fn group(&self, field: FieldName) -> Option<&FormGroup> {
        self.groups.iter().find(|g| g.field == field)
    }

    fn group_mut(&mut self, field: FieldName) -> Option<&mut FormGroup> {
        self.groups.iter_mut().find(|g| g.field == field)
    }

    /// Annotation text currently shown for `field`
    pub fn annotation(&self, field: FieldName) -> Option<&str> {
        self.group(field).and_then(|g| g.annotation.as_deref())
    }

    /// Whether `field` carries the invalid mark
    pub fn is_invalid(&self, field: FieldName) -> bool {
        self.group(field).is_some_and(|g| g.invalid)
    }

    /// Number of annotations currently shown
    pub fn annotation_count(&self) -> usize {
        self.groups.iter().filter(|g| g.annotation.is_some()).count()
    }

    /// Confirmation text, once the form was replaced
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Current input values
    pub fn submission(&self) -> ContactSubmission {
        let mut submission = ContactSubmission::default();
        for group in &self.groups {
            submission.set(group.field, group.value.clone());
        }
        submission
    }

    /// Render the form as HTML markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) -> core::fmt::Result {
        writeln!(out, "<form class=\"{}\">", FORM_CLASS)?;

        if let Some(message) = &self.confirmation {
            writeln!(
                out,
                "  <div class=\"{}\">{}</div>",
                SUCCESS_MESSAGE_CLASS,
                escape_html(message)
            )?;
        }

        for group in &self.groups {
            writeln!(out, "  <div class=\"{}\">", FORM_GROUP_CLASS)?;

            let id = group.field.as_str();
            let class = if group.invalid {
                alloc::format!(" class=\"{}\"", INVALID_CLASS)
            } else {
                String::new()
            };
            let value = escape_html(&group.value);

            match group.field {
                FieldName::Message => writeln!(
                    out,
                    "    <textarea id=\"{id}\" name=\"{id}\"{class}>{value}</textarea>"
                )?,
                FieldName::Email => writeln!(
                    out,
                    "    <input type=\"email\" id=\"{id}\" name=\"{id}\"{class} value=\"{value}\">"
                )?,
                FieldName::Name => writeln!(
                    out,
                    "    <input type=\"text\" id=\"{id}\" name=\"{id}\"{class} value=\"{value}\">"
                )?,
            }

            if let Some(annotation) = &group.annotation {
                writeln!(
                    out,
                    "    <div class=\"{}\">{}</div>",
                    ERROR_MESSAGE_CLASS,
                    escape_html(annotation)
                )?;
            }

            writeln!(out, "  </div>")?;
        }

        writeln!(out, "</form>")
    }
}

impl FormView for FormDocument {
    fn show_error(&mut self, field: FieldName, message: &str) {
        if let Some(group) = self.group_mut(field) {
            group.annotation = Some(message.to_string());
            group.invalid = true;
        }
    }

    fn clear_error(&mut self, field: FieldName) {
        if let Some(group) = self.group_mut(field) {
            group.annotation = None;
            group.invalid = false;
        }
    }

    fn show_confirmation(&mut self, message: &str) {
        self.groups.clear();
        self.confirmation = Some(message.to_string());
    }

    fn show_value(&mut self, field: FieldName, value: &str) {
        if let Some(group) = self.group_mut(field) {
            group.value = value.to_string();
        }
    }

    fn value(&self, field: FieldName) -> Option<&str> {
        self.group(field).map(|g| g.value.as_str())
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
