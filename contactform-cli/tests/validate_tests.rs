use std::fs;
use tempfile::tempdir;

use contactform_cli::{commands::validate, load_submission};
use contactform_core::{FieldError, FieldName};

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn validate_flat_object_blank_name() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    write_file(
        &in_path,
        r#"{"name": "", "email": "a@b.com", "message": "hi"}"#,
    );

    let report = validate::execute(in_path.to_str().unwrap(), false).unwrap();

    assert!(!report.valid);
    assert_eq!(report.message(FieldName::Name), Some("Please enter your name"));
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn validate_field_list_bad_email_json_output() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    write_file(
        &in_path,
        r#"[
          {"name": "name", "value": "Jo"},
          {"name": "email", "value": "not-an-email"},
          {"name": "message", "value": "hi"}
        ]"#,
    );

    let report = validate::execute(in_path.to_str().unwrap(), true).unwrap();

    assert_eq!(report.kind(FieldName::Email), Some(FieldError::InvalidFormat));
    assert_eq!(
        report.message(FieldName::Email),
        Some("Please enter a valid email")
    );
}

#[test]
fn validate_field_list_missing_fields_are_required() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    write_file(
        &in_path,
        r#"[{"name": "email", "value": "jo@example.com"}, {"name": "phone", "value": "1"}]"#,
    );

    let report = validate::execute(in_path.to_str().unwrap(), false).unwrap();

    assert_eq!(report.kind(FieldName::Name), Some(FieldError::Required));
    assert_eq!(report.kind(FieldName::Message), Some(FieldError::Required));
    assert!(report.passed(FieldName::Email));
}

#[test]
fn validate_valid_submission() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    write_file(
        &in_path,
        r#"{"name": "Jo", "email": "jo@example.com", "message": "hi"}"#,
    );

    let report = validate::execute(in_path.to_str().unwrap(), false).unwrap();

    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn validate_missing_file_errors() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("absent.json");

    let err = validate::execute(in_path.to_str().unwrap(), false).unwrap_err();
    assert!(err.to_string().contains("Failed to read input file"));
}

#[test]
fn load_submission_rejects_malformed_json() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    write_file(&in_path, "{not json");

    let err = load_submission(in_path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse submission JSON"));
}
