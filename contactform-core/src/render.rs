//! Rendering adapter between a validation report and a form view

use crate::types::FieldName;
use crate::validator::ValidationReport;

/// A UI surface that can display field annotations
///
/// Implementations must keep at most one annotation per field: showing an
/// error on an annotated field replaces its text.
pub trait FormView {
    /// Attach `message` below `field` and mark the field invalid
    fn show_error(&mut self, field: FieldName, message: &str);

    /// Remove any annotation on `field` and clear its invalid mark
    fn clear_error(&mut self, field: FieldName);

    /// Replace the form's content with a confirmation message
    fn show_confirmation(&mut self, message: &str);

    /// Reflect an edited value; views that own no input state ignore it
    fn show_value(&mut self, _field: FieldName, _value: &str) {}

    /// Value currently held by the view's input, if it holds one
    fn value(&self, _field: FieldName) -> Option<&str> {
        None
    }
}

impl<V: FormView + ?Sized> FormView for &mut V {
    fn show_error(&mut self, field: FieldName, message: &str) {
        (**self).show_error(field, message)
    }

    fn clear_error(&mut self, field: FieldName) {
        (**self).clear_error(field)
    }

    fn show_confirmation(&mut self, message: &str) {
        (**self).show_confirmation(message)
    }

    fn show_value(&mut self, field: FieldName, value: &str) {
        (**self).show_value(field, value)
    }

    fn value(&self, field: FieldName) -> Option<&str> {
        (**self).value(field)
    }
}

/// Apply a report to a view: annotate failing fields, clear passing ones
pub fn apply<V: FormView + ?Sized>(report: &ValidationReport, view: &mut V) {
    for field in FieldName::ALL {
        match report.message(field) {
            Some(message) => view.show_error(field, message),
            None => view.clear_error(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactSubmission;
    use crate::validator::validate_submission;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<String>,
    }

    impl FormView for RecordingView {
        fn show_error(&mut self, field: FieldName, message: &str) {
            self.calls.push(alloc::format!("error {}: {}", field, message));
        }

        fn clear_error(&mut self, field: FieldName) {
            self.calls.push(alloc::format!("clear {}", field));
        }

        fn show_confirmation(&mut self, message: &str) {
            self.calls.push(alloc::format!("confirm {}", message));
        }
    }

    #[test]
    fn test_apply_touches_every_field_once() {
        let report = validate_submission(&ContactSubmission::new("Jo", "", "hi"));
        let mut view = RecordingView::default();

        apply(&report, &mut view);

        assert_eq!(
            view.calls,
            [
                "clear name",
                "error email: Please enter your email",
                "clear message",
            ]
        );
    }
}
