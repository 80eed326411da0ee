//! Error types shared by the kernel primitives.
//!
//! [`ErrorMessage`] is the only failure payload an [`crate::Outcome`] carries.
//! The remaining enums describe programming-contract violations and lookup
//! failures raised by the kernel itself.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Human-readable failure text.
///
/// ## Invariants
/// - The message is never empty.
///
/// # Examples
/// ```
/// use shared_kernel::ErrorMessage;
///
/// let message = ErrorMessage::new("Student not found").expect("non-empty");
/// assert_eq!(message.as_str(), "Student not found");
/// assert!(ErrorMessage::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ErrorMessage(Cow<'static, str>);

impl ErrorMessage {
    /// Validate and construct an [`ErrorMessage`].
    pub fn new(message: impl Into<Cow<'static, str>>) -> Result<Self, OutcomeContractError> {
        let text = message.into();
        if text.is_empty() {
            return Err(OutcomeContractError::FailureWithoutError);
        }
        Ok(Self(text))
    }

    /// Borrow the message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ErrorMessage {}

impl From<ErrorMessage> for String {
    fn from(value: ErrorMessage) -> Self {
        value.0.into_owned()
    }
}

impl TryFrom<String> for ErrorMessage {
    type Error = OutcomeContractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Violations of the success/error pairing an [`crate::Outcome`] must honour.
///
/// These signal a programming error in the caller rather than a business
/// failure, so the panicking constructors abort on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeContractError {
    /// A success was built with a non-empty error.
    #[error("Success result cannot have error")]
    SuccessWithError,
    /// A failure was built with an empty error.
    #[error("Failure result must have error")]
    FailureWithoutError,
    /// A success was built without a value.
    #[error("Success result must carry a value")]
    SuccessWithoutValue,
    /// A failure was built with a value.
    #[error("Failure result cannot carry a value")]
    FailureWithValue,
}

/// Lookup failures raised by [`crate::Enumeration`] resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    /// No declared member matches the requested value or name.
    #[error("'{input}' is not a valid {description} in {enumeration}")]
    NotAMember {
        /// Offending input, rendered for display.
        input: String,
        /// Which lookup was attempted (`value` or `name`).
        description: &'static str,
        /// Name of the enumeration type.
        enumeration: &'static str,
    },
}

impl EnumerationError {
    pub(crate) fn not_a_member(
        input: impl fmt::Display,
        description: &'static str,
        enumeration: &'static str,
    ) -> Self {
        Self::NotAMember {
            input: input.to_string(),
            description,
            enumeration,
        }
    }
}
