//! Fuzzing entry points for contactform-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_validate

use contactform_core::{
    render::apply, validate, validate_submission, ContactForm, ContactSubmission, Field,
    FormDocument,
};

/// Split fuzz input into the three field values on NUL bytes
fn split_values(data: &[u8]) -> ContactSubmission {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.splitn(3, '\0');
    ContactSubmission::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

pub fn fuzz_validate(data: &[u8]) {
    let submission = split_values(data);

    // Both entry points must agree and never panic
    let flat = validate_submission(&submission);
    let pairs = validate(&submission.fields());
    assert_eq!(flat, pairs);

    let mut doc = FormDocument::with_values(&submission);
    apply(&flat, &mut doc);
    assert_eq!(doc.annotation_count(), flat.errors.len());
    let _ = doc.to_markup();
}

pub fn fuzz_submit(data: &[u8]) {
    let mut form = ContactForm::new(FormDocument::new());
    if form.fill(split_values(data)).is_err() {
        return;
    }
    let _ = form.submit();
}

pub fn fuzz_fields(data: &[u8]) {
    // Alternate name/value pairs separated by NUL
    let text = String::from_utf8_lossy(data);
    let parts: Vec<&str> = text.split('\0').collect();
    let fields: Vec<Field> = parts
        .chunks(2)
        .map(|c| Field::new(c[0], c.get(1).copied().unwrap_or_default()))
        .collect();
    let _ = validate(&fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_validate_empty() {
        fuzz_validate(&[]);
    }

    #[test]
    fn test_fuzz_validate_random() {
        fuzz_validate(&[0xFF, 0x00, b'@', 0x00, 0xC3]);
    }

    #[test]
    fn test_fuzz_submit_valid() {
        fuzz_submit(b"Jo\0jo@example.com\0hi");
    }

    #[test]
    fn test_fuzz_fields_odd_count() {
        fuzz_fields(b"name\0Jo\0email");
    }
}
