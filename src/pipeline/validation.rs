//! Field validation and live phone formatting for the waitlist form
//!
//! All functions here are pure so they can back both the browser-side form
//! and the server-side re-validation in the waitlist service.

use crate::models::FieldName;

/// Minimum trimmed length for the full-name field
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum digit count for the phone field
pub const MIN_PHONE_DIGITS: usize = 10;

/// Digits kept by the live phone formatter
pub const MAX_PHONE_DIGITS: usize = 10;

pub const NAME_ERROR: &str = "Please enter your full name (at least 2 characters)";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str = "Please enter a valid phone number";

/// Outcome of checking a single field.
///
/// Empty input is reported separately from invalid input: an untouched field
/// the user tabbed through should never show an error, but it is not
/// submittable either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    Empty,
    Valid,
    Invalid(&'static str),
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    /// The error message to display, if any. `Empty` carries none.
    pub fn error(&self) -> Option<&'static str> {
        match *self {
            FieldCheck::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Checks one field's current value against its rule.
pub fn check_field(field: FieldName, value: &str) -> FieldCheck {
    if value.trim().is_empty() {
        return FieldCheck::Empty;
    }
    let valid = match field {
        FieldName::FullName => value.trim().chars().count() >= MIN_NAME_LENGTH,
        FieldName::Email => is_valid_email(value.trim()),
        FieldName::Phone => digit_count(value) >= MIN_PHONE_DIGITS,
    };
    if valid {
        FieldCheck::Valid
    } else {
        FieldCheck::Invalid(field_error(field))
    }
}

pub fn field_error(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => NAME_ERROR,
        FieldName::Email => EMAIL_ERROR,
        FieldName::Phone => PHONE_ERROR,
    }
}

/// Email shape check: one `@` separating a non-empty local part from a
/// domain that contains an interior dot, with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Reformats a phone value as `(DDD) DDD-DDDD`, built up incrementally as
/// the user types. Strips everything that is not a digit first, keeps at
/// most ten digits, and leaves fewer than three digits untouched. Running
/// the formatter over its own output is a no-op.
pub fn format_phone(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_length_boundary() {
        assert_eq!(
            check_field(FieldName::FullName, "A"),
            FieldCheck::Invalid(NAME_ERROR)
        );
        assert_eq!(check_field(FieldName::FullName, "Al"), FieldCheck::Valid);
        assert_eq!(
            check_field(FieldName::FullName, "Ada Lovelace"),
            FieldCheck::Valid
        );
        // Surrounding whitespace does not count towards the minimum
        assert_eq!(
            check_field(FieldName::FullName, "  B  "),
            FieldCheck::Invalid(NAME_ERROR)
        );
    }

    #[test]
    fn empty_input_is_not_flagged() {
        for field in FieldName::all() {
            assert_eq!(check_field(field, ""), FieldCheck::Empty);
            assert_eq!(check_field(field, "   "), FieldCheck::Empty);
            assert_eq!(check_field(field, "").error(), None);
        }
    }

    #[test]
    fn email_accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(is_valid_email("user+tag@example.io"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("plaintext"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn email_empty_vs_invalid() {
        assert_eq!(check_field(FieldName::Email, "  "), FieldCheck::Empty);
        assert_eq!(
            check_field(FieldName::Email, "a@b"),
            FieldCheck::Invalid(EMAIL_ERROR)
        );
        assert_eq!(check_field(FieldName::Email, "a@b").error(), Some(EMAIL_ERROR));
    }

    #[test]
    fn phone_digit_count_rule() {
        // Ten digits pass no matter how they are punctuated
        assert_eq!(check_field(FieldName::Phone, "5551234567"), FieldCheck::Valid);
        assert_eq!(
            check_field(FieldName::Phone, "(555) 123-4567"),
            FieldCheck::Valid
        );
        // Nine digits fail
        assert_eq!(
            check_field(FieldName::Phone, "555123456"),
            FieldCheck::Invalid(PHONE_ERROR)
        );
        assert_eq!(
            check_field(FieldName::Phone, "(555) 123-456"),
            FieldCheck::Invalid(PHONE_ERROR)
        );
        // Non-empty input with no digits at all is invalid, not empty
        assert_eq!(
            check_field(FieldName::Phone, "call me"),
            FieldCheck::Invalid(PHONE_ERROR)
        );
    }

    #[test]
    fn phone_formatter_stages() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "5");
        assert_eq!(format_phone("55"), "55");
        assert_eq!(format_phone("555"), "(555) ");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("55512"), "(555) 12");
        assert_eq!(format_phone("555123"), "(555) 123-");
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn phone_formatter_strips_and_truncates() {
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("+1 555 123 4567 ext 9"), "(155) 512-3456");
        assert_eq!(format_phone("55512345678901"), "(555) 123-4567");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn phone_formatter_is_idempotent() {
        for input in ["55", "555", "55512", "5551234567", "555123456789"] {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once);
        }
    }
}
