//! Accumulation of rule violations ahead of a single [`Outcome`].

use crate::Outcome;

/// Separator placed between collected messages.
pub const MESSAGE_SEPARATOR: &str = "; ";

/// Collects the messages of every failed rule so callers report all of them
/// at once.
///
/// # Examples
/// ```
/// use shared_kernel::ValidationReport;
///
/// let mut report = ValidationReport::default();
/// report.check(false, "Student ID is required");
/// report.check(true, "unused");
/// report.check(false, "Grade must be between 0 and 100");
/// assert_eq!(
///     report.into_outcome(()).error(),
///     "Student ID is required; Grade must be between 0 and 100"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: Vec<String>,
}

impl ValidationReport {
    /// Record `message` unless `rule_holds`.
    pub fn check(&mut self, rule_holds: bool, message: impl Into<String>) -> &mut Self {
        if !rule_holds {
            self.push(message);
        }
        self
    }

    /// Record an unconditional violation. Empty messages are ignored.
    pub fn push(&mut self, message: impl Into<String>) -> &mut Self {
        let text = message.into();
        if !text.is_empty() {
            self.messages.push(text);
        }
        self
    }

    /// Record the failure text of `outcome`, if it failed.
    pub fn absorb<T>(&mut self, outcome: &Outcome<T>) -> &mut Self {
        if outcome.is_failure() {
            self.push(outcome.error());
        }
        self
    }

    /// Whether no rule has been violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Collected messages in recording order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success carrying `value` when valid, otherwise a failure joining every
    /// message with [`MESSAGE_SEPARATOR`].
    pub fn into_outcome<T>(self, value: T) -> Outcome<T> {
        if self.is_valid() {
            Outcome::success(value)
        } else {
            Outcome::failure(self.messages.join(MESSAGE_SEPARATOR))
        }
    }
}
