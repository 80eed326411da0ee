//! Email address value object.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Component, Outcome, ValueObject, value_object_equality};

/// Maximum number of characters in a trimmed email address.
pub const EMAIL_MAX_LENGTH: usize = 50;

/// Validation errors returned by [`Email::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailValidationError {
    /// Input was empty or whitespace.
    #[error("Email should not be empty")]
    Empty,
    /// Input exceeded [`EMAIL_MAX_LENGTH`] once trimmed.
    #[error("Email should not have more than {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Input is not a syntactically valid address.
    #[error("Email is not in a valid format")]
    InvalidFormat,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Length and the trailing dot are checked separately.
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Trimmed, validated email address.
///
/// ## Invariants
/// - Non-empty, at most [`EMAIL_MAX_LENGTH`] characters, no surrounding
///   whitespace.
/// - Matches `local@domain` and does not end with a dot.
///
/// Equality ignores case.
///
/// # Examples
/// ```
/// use shared_kernel::Email;
///
/// let email = Email::create(" Admin@Example.com ");
/// assert!(email.is_success());
/// assert_eq!(email.value().map(Email::as_str), Some("Admin@Example.com"));
/// assert_eq!(Email::create("").error(), "Email should not be empty");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate `raw` and build an [`Email`], reporting the outcome.
    pub fn create(raw: impl AsRef<str>) -> Outcome<Self> {
        Outcome::from_result(Self::parse(raw))
    }

    /// Validate `raw` and build an [`Email`].
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if trimmed.chars().count() > EMAIL_MAX_LENGTH {
            return Err(EmailValidationError::TooLong {
                max: EMAIL_MAX_LENGTH,
            });
        }
        if trimmed.ends_with('.') || !email_regex().is_match(trimmed) {
            return Err(EmailValidationError::InvalidFormat);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the address text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl ValueObject for Email {
    fn equality_components(&self) -> Vec<Component<'_>> {
        vec![Component::IgnoreCase(&self.0)]
    }
}

value_object_equality!(Email);

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Email {
    type Err = EmailValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for email parsing.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::rstest;

    use super::*;

    #[test]
    fn accepts_valid_address() {
        let email = Email::parse("admin@snowmanlabs.com").expect("valid email");
        assert_eq!(email.as_str(), "admin@snowmanlabs.com");
    }

    #[rstest]
    #[case("", EmailValidationError::Empty)]
    #[case("   ", EmailValidationError::Empty)]
    #[case(
        "asdfghjklqwertyuiopzxcvbnmasdfghjklqwertyuiopzxcvbnm@email.com",
        EmailValidationError::TooLong { max: EMAIL_MAX_LENGTH }
    )]
    #[case("email_wtih_,@email.com", EmailValidationError::InvalidFormat)]
    #[case("user@example.com.", EmailValidationError::InvalidFormat)]
    #[case("no-at-sign.example.com", EmailValidationError::InvalidFormat)]
    #[case("two@@example.com", EmailValidationError::InvalidFormat)]
    #[case("space inside@example.com", EmailValidationError::InvalidFormat)]
    fn rejects_invalid_addresses(#[case] raw: &str, #[case] expected: EmailValidationError) {
        assert_eq!(Email::parse(raw).err(), Some(expected));
    }

    #[test]
    fn create_reports_validation_message() {
        let outcome = Email::create("asdfghjklqwertyuiopzxcvbnmasdfghjklqwertyuiopzxcvbnm@email.com");
        assert_eq!(outcome.error(), "Email should not have more than 50 characters");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let email = Email::parse("  ada@example.org\n").expect("valid email");
        assert_eq!(email.to_string(), "ada@example.org");
    }

    #[test]
    fn equality_ignores_case() {
        let lower = Email::parse("ada@example.org").expect("valid email");
        let upper = Email::parse("ADA@Example.ORG").expect("valid email");
        assert_eq!(lower, upper);
        assert_eq!(lower.structural_hash(), upper.structural_hash());
    }

    #[test]
    fn serde_enforces_validation() {
        let email: Email = serde_json::from_str("\"ada@example.org\"").expect("valid json email");
        assert_eq!(serde_json::to_string(&email).expect("serialise"), "\"ada@example.org\"");
        assert!(serde_json::from_str::<Email>("\"not an email\"").is_err());
    }

    #[test]
    fn storage_column_round_trip() {
        let column: String = Email::parse("ada@example.org").expect("valid email").into();
        let restored = Email::try_from(column).expect("stored value is valid");
        assert_eq!(restored.as_str(), "ada@example.org");
    }
}
