//! Validation Utilities
//!
//! Input checks shared by the registration and login flows, plus formatting of
//! `validator` errors for the customer endpoints.

use validator::ValidationErrors;

/// Whitespace that counts towards a blank credential
///
/// Non-breaking spaces (U+00A0, U+2007, U+202F), NEL and the directional marks
/// are content, while the ASCII separators U+001C..U+001F are whitespace.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{200E}' | '\u{200F}' => false,
        other => other.is_whitespace(),
    }
}

/// Returns true when the value is missing, empty, or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.chars().all(is_blank_char))
}

/// Returns the email and password when both are present and non-blank
///
/// Values are returned untouched; surrounding whitespace is part of the credential.
pub fn require_credentials<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    if is_blank(email) || is_blank(password) {
        return None;
    }
    email.zip(password)
}

/// Flattens validator field errors into a single message
pub fn format_validation_errors(err: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, errors) in err.field_errors() {
        for error in errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for field '{}'", field));
            messages.push(format!("{}: {}", field, message));
        }
    }

    messages.sort();
    messages.join(", ")
}

/// Validation error messages for user-facing responses
pub mod messages {
    pub const EMPTY_CREDENTIALS: &str = "Email and Password cannot be empty";
    pub const INVALID_CREDENTIALS: &str = "Invalid Email and Password";
}
