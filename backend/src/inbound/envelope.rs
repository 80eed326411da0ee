//! JSON response envelope for service outcomes.
//!
//! Success serialises as `{"status":"success","data":...}` and failure as
//! `{"status":"error","error":"..."}`. No other shape is produced.

use serde::Serialize;
use shared_kernel::Outcome;

/// Transport representation of an [`Outcome`].
///
/// # Examples
/// ```
/// use campus::inbound::ResponseEnvelope;
/// use shared_kernel::Outcome;
///
/// let envelope = ResponseEnvelope::from(Outcome::<u8>::failure("User not found"));
/// assert_eq!(
///     envelope.to_json().expect("serialisable"),
///     r#"{"status":"error","error":"User not found"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseEnvelope<T> {
    /// The operation succeeded with `data`.
    Success {
        /// Payload.
        data: T,
    },
    /// The operation failed with `error`.
    Error {
        /// Failure text.
        error: String,
    },
}

impl<T> ResponseEnvelope<T> {
    /// Whether the envelope carries data.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl<T: Serialize> ResponseEnvelope<T> {
    /// Render the envelope as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when `T` refuses to serialise.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T> From<Outcome<T>> for ResponseEnvelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome.into_result() {
            Ok(data) => Self::Success { data },
            Err(message) => Self::Error {
                error: message.into(),
            },
        }
    }
}
