//! Validation rules for each contact form field
//!
//! Rules for a field are checked in order and the first failing rule wins.

use crate::constants::{
    EMAIL_INVALID_MESSAGE, EMAIL_REQUIRED_MESSAGE, MESSAGE_REQUIRED_MESSAGE,
    NAME_REQUIRED_MESSAGE,
};
use crate::error::FieldError;
use crate::types::FieldName;

/// A pure predicate over a field value, paired with its failure message
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    /// Verdict reported when the predicate fails
    pub kind: FieldError,

    /// Message shown below the field when the predicate fails
    pub message: &'static str,

    check: fn(&str) -> bool,
}

impl ValidationRule {
    /// Create a new rule
    pub const fn new(kind: FieldError, message: &'static str, check: fn(&str) -> bool) -> Self {
        Self {
            kind,
            message,
            check,
        }
    }

    /// Whether `value` satisfies this rule
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

/// Rules for the name field
pub const NAME_RULES: &[ValidationRule] = &[ValidationRule::new(
    FieldError::Required,
    NAME_REQUIRED_MESSAGE,
    is_present,
)];

/// Rules for the email field
pub const EMAIL_RULES: &[ValidationRule] = &[
    ValidationRule::new(FieldError::Required, EMAIL_REQUIRED_MESSAGE, is_present),
    ValidationRule::new(FieldError::InvalidFormat, EMAIL_INVALID_MESSAGE, is_valid_email),
];

/// Rules for the message field
pub const MESSAGE_RULES: &[ValidationRule] = &[ValidationRule::new(
    FieldError::Required,
    MESSAGE_REQUIRED_MESSAGE,
    is_present,
)];

/// Ordered rules for a field
pub fn rules_for(field: FieldName) -> &'static [ValidationRule] {
    match field {
        FieldName::Name => NAME_RULES,
        FieldName::Email => EMAIL_RULES,
        FieldName::Message => MESSAGE_RULES,
    }
}

/// First rule `value` fails for `field`, if any
pub fn first_failure(field: FieldName, value: &str) -> Option<&'static ValidationRule> {
    rules_for(field).iter().find(|rule| !rule.passes(value))
}

/// Whitespace as browsers define it for `trim()` and `\s`
///
/// Unicode `White_Space` minus NEL (U+0085), plus the BOM (U+FEFF).
fn is_form_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Whether the value is non-empty after trimming
pub fn is_present(value: &str) -> bool {
    !value.trim_matches(is_form_space).is_empty()
}

/// Permissive `local@domain.tld` shape check
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$` on the untrimmed value: no
/// whitespace, exactly one `@` with something before it, and a `.` in the
/// domain that is neither its first nor its last character. Many invalid
/// addresses pass; that laxity is intended.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_form_space) {
        return false;
    }

    let bytes = value.as_bytes();
    let Some(at) = memchr::memchr(b'@', bytes) else {
        return false;
    };

    let (local, domain) = (&bytes[..at], &bytes[at + 1..]);
    if local.is_empty() || memchr::memchr(b'@', domain).is_some() {
        return false;
    }

    domain.len() >= 3 && memchr::memchr(b'.', &domain[1..domain.len() - 1]).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present("Jo"));
        assert!(is_present("  Jo  "));
        assert!(!is_present(""));
        assert!(!is_present(" \t\n"));
        assert!(!is_present("\u{feff}\u{a0}"));
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(is_present("\u{85}"));
        assert!(is_valid_email("a@b.c\u{85}"));
        assert!(first_failure(FieldName::Name, "\u{85}").is_none());
        assert!(first_failure(FieldName::Email, "a@b.c\u{85}").is_none());
    }

    #[test]
    fn test_email_accepts_minimal_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        // Permissive on purpose
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("a@...."));
        assert!(is_valid_email("\"quoted\"@x.y"));
        assert!(is_valid_email("ü@é.ñ"));
    }

    #[test]
    fn test_email_rejects_bad_shapes() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a@com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email("a@b.\u{feff}com"));
    }

    #[test]
    fn test_first_failure_priority() {
        let rule = first_failure(FieldName::Email, "   ").unwrap();
        assert_eq!(rule.kind, FieldError::Required);
        assert_eq!(rule.message, EMAIL_REQUIRED_MESSAGE);

        let rule = first_failure(FieldName::Email, "nope").unwrap();
        assert_eq!(rule.kind, FieldError::InvalidFormat);

        assert!(first_failure(FieldName::Email, "jo@example.com").is_none());
        assert!(first_failure(FieldName::Message, "hi").is_none());
    }
}
