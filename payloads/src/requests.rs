use jiff::{Timestamp, civil};
use serde::{Deserialize, Serialize};

/// Times of day at which the digest can be sent to a recipient.
pub const SUMMARY_SEND_TIMES: [civil::Time; 3] = [
    civil::time(8, 0, 0, 0),
    civil::time(14, 0, 0, 0),
    civil::time(20, 0, 0, 0),
];

/// Validation result for email addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Invalid,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid => Some("Please enter a valid email address"),
        }
    }
}

/// Validate an email address.
///
/// Rules, equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`:
/// - exactly one `@`, no whitespace anywhere
/// - a non-empty local part
/// - a domain containing a `.` with at least one character on each side
pub fn validate_email(email: &str) -> EmailValidation {
    if email.chars().any(is_pattern_space) {
        return EmailValidation::Invalid;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return EmailValidation::Invalid;
    };
    if local.is_empty() || domain.contains('@') {
        return EmailValidation::Invalid;
    }

    // Some dot must have a character before and after it
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return EmailValidation::Invalid;
    }

    EmailValidation::Valid
}

/// The `\s` class of the pattern: Unicode `White_Space` minus NEL, plus
/// the byte order mark.
fn is_pattern_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Promote an existing user to admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterAdmin {
    pub email: String,
}

/// Register or update a recipient of the email digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub target_email: String,
    pub summary_send_time: civil::Time,
    pub last_updated: Timestamp,
}

/// Authorization code handed back by Google, exchanged by the backend for a
/// bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleCallback {
    pub code: String,
}
