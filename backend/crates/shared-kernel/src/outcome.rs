//! Railway-oriented success/failure container.
//!
//! Purpose: report the result of every domain operation without panicking
//! or reaching for `std::result::Result` with ad hoc error types. A failure
//! short-circuits every downstream combinator and carries one non-empty
//! message; a success carries the produced value (unit for commands).

use std::borrow::Cow;
use std::fmt;
use std::future::Future;

use crate::error::{ErrorMessage, OutcomeContractError};

/// Fallback text used when a foreign error renders as an empty string.
const UNSPECIFIED_FAILURE: &str = "operation failed";

/// Outcome of a domain operation.
///
/// `Outcome` without a type parameter is the command form: it reports success
/// or failure and nothing else. `Outcome<T>` additionally carries the value
/// produced on success.
///
/// ## Invariants
/// - A success never carries an error; [`Outcome::error`] returns `""`.
/// - A failure always carries a non-empty [`ErrorMessage`] and never a value.
///
/// # Examples
/// ```
/// use shared_kernel::Outcome;
///
/// let doubled = Outcome::success(5)
///     .ensure(|x| *x > 0, "must be positive")
///     .map(|x| x * 2);
/// assert_eq!(doubled.value(), Some(&10));
///
/// let rejected = Outcome::success(-5)
///     .ensure(|x| *x > 0, "must be positive")
///     .map(|x| x * 2);
/// assert_eq!(rejected.error(), "must be positive");
/// ```
#[must_use = "an outcome reports success or failure and must be inspected"]
#[derive(Debug, Clone)]
pub enum Outcome<T = ()> {
    /// The operation succeeded and produced a value.
    Success(T),
    /// The operation failed for the given reason.
    Failure(ErrorMessage),
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `value`.
    ///
    /// Commands use `Outcome::success(())`.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Failed outcome carrying `error`, panicking if `error` is empty.
    ///
    /// An empty error is a programming error in the caller; use
    /// [`Outcome::try_failure`] when the text is not known to be non-empty.
    ///
    /// # Panics
    ///
    /// Panics when `error` is empty.
    pub fn failure(error: impl Into<Cow<'static, str>>) -> Self {
        match Self::try_failure(error) {
            Ok(value) => value,
            Err(err) => panic!("outcome construction violated its contract: {err}"),
        }
    }

    /// Fallible constructor for a failed outcome.
    pub fn try_failure(
        error: impl Into<Cow<'static, str>>,
    ) -> Result<Self, OutcomeContractError> {
        ErrorMessage::new(error).map(Self::Failure)
    }

    /// Build an outcome from raw parts, panicking on an inconsistent pairing.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions [`Outcome::try_new`] rejects.
    pub fn new(
        is_success: bool,
        value: Option<T>,
        error: impl Into<Cow<'static, str>>,
    ) -> Self {
        match Self::try_new(is_success, value, error) {
            Ok(value) => value,
            Err(err) => panic!("outcome construction violated its contract: {err}"),
        }
    }

    /// Fallible constructor from raw parts.
    ///
    /// Rejects a success with a non-empty error or without a value, and a
    /// failure with an empty error or with a value.
    pub fn try_new(
        is_success: bool,
        value: Option<T>,
        error: impl Into<Cow<'static, str>>,
    ) -> Result<Self, OutcomeContractError> {
        let text = error.into();
        if is_success {
            if !text.is_empty() {
                return Err(OutcomeContractError::SuccessWithError);
            }
            return value
                .map(Self::Success)
                .ok_or(OutcomeContractError::SuccessWithoutValue);
        }
        if value.is_some() {
            return Err(OutcomeContractError::FailureWithValue);
        }
        Self::try_failure(text)
    }

    /// Convert a standard result, rendering the error with `Display`.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(
                ErrorMessage::new(err.to_string()).unwrap_or_else(|_| unspecified_failure()),
            ),
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Failure text, or `""` for a success.
    #[must_use]
    pub fn error(&self) -> &str {
        match self {
            Self::Success(_) => "",
            Self::Failure(message) => message.as_str(),
        }
    }

    /// Borrow the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Take the success value, discarding any failure.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a standard result so `?` can propagate the failure.
    pub fn into_result(self) -> Result<T, ErrorMessage> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }

    /// Transform the success value; failures pass through without calling `mapper`.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chain an operation that itself returns an outcome.
    ///
    /// The first failure in a chain is returned unchanged and no later
    /// `binder` runs.
    pub fn bind<U>(self, binder: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => binder(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Turn a success into a failure when `predicate` rejects its value.
    ///
    /// # Panics
    ///
    /// Panics when the predicate rejects the value and `error` is empty.
    pub fn ensure(
        self,
        predicate: impl FnOnce(&T) -> bool,
        error: impl Into<Cow<'static, str>>,
    ) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::failure(error)
                }
            }
            Self::Failure(message) => Self::Failure(message),
        }
    }

    /// Run `action` on the success value and return the outcome unchanged.
    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` on the failure text and return the outcome unchanged.
    pub fn on_failure(self, action: impl FnOnce(&str)) -> Self {
        if let Self::Failure(message) = &self {
            action(message.as_str());
        }
        self
    }

    /// Rewrite the failure text.
    ///
    /// An empty rewrite keeps the original message.
    pub fn map_err(self, rewrite: impl FnOnce(&str) -> String) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => {
                Self::Failure(ErrorMessage::new(rewrite(message.as_str())).unwrap_or(message))
            }
        }
    }

    /// Asynchronous [`Outcome::map`].
    ///
    /// On failure the mapper is never called, so no future is created or
    /// polled.
    pub async fn map_async<U, F, Fut>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value).await),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Asynchronous [`Outcome::bind`].
    pub async fn bind_async<U, F, Fut>(self, binder: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => binder(value).await,
            Self::Failure(message) => Outcome::Failure(message),
        }
    }
}

impl<T> From<ErrorMessage> for Outcome<T> {
    fn from(value: ErrorMessage) -> Self {
        Self::Failure(value)
    }
}

fn unspecified_failure() -> ErrorMessage {
    match ErrorMessage::new(UNSPECIFIED_FAILURE) {
        Ok(message) => message,
        Err(err) => panic!("fallback failure text must be non-empty: {err}"),
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for outcome construction and combinators.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use std::cell::Cell;
    use std::panic::catch_unwind;

    use rstest::rstest;

    use super::*;

    #[test]
    fn unit_success_has_empty_error() {
        let outcome = Outcome::success(());
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.error(), "");
    }

    #[test]
    fn success_carries_value() {
        let outcome = Outcome::success("test value");
        assert_eq!(outcome.value(), Some(&"test value"));
        assert_eq!(outcome.error(), "");
    }

    #[rstest]
    #[case("Something went wrong")]
    #[case("x")]
    #[case("Grade must be between 0 and 100")]
    fn failure_reports_error(#[case] error: &'static str) {
        let outcome: Outcome<String> = Outcome::failure(error);
        assert!(outcome.is_failure());
        assert_eq!(outcome.error(), error);
        assert!(outcome.value().is_none());
    }

    #[test]
    fn empty_failure_panics() {
        let result = catch_unwind(|| Outcome::<()>::failure(""));
        assert!(result.is_err());
    }

    #[test]
    fn try_failure_rejects_empty_error() {
        assert!(matches!(
            Outcome::<()>::try_failure(String::new()),
            Err(OutcomeContractError::FailureWithoutError)
        ));
    }

    #[rstest]
    #[case(true, Some(1), "boom", OutcomeContractError::SuccessWithError)]
    #[case(true, None, "", OutcomeContractError::SuccessWithoutValue)]
    #[case(false, None, "", OutcomeContractError::FailureWithoutError)]
    #[case(false, Some(1), "boom", OutcomeContractError::FailureWithValue)]
    fn try_new_rejects_inconsistent_pairings(
        #[case] is_success: bool,
        #[case] value: Option<i32>,
        #[case] error: &'static str,
        #[case] expected: OutcomeContractError,
    ) {
        let result = Outcome::try_new(is_success, value, error);
        assert_eq!(result.err(), Some(expected));
    }

    #[test]
    fn new_panics_on_success_with_error() {
        let result = catch_unwind(|| Outcome::new(true, Some(()), "unexpected"));
        assert!(result.is_err());
    }

    #[test]
    fn try_new_accepts_consistent_pairings() {
        let success = Outcome::try_new(true, Some(7), "").expect("consistent success");
        assert_eq!(success.value(), Some(&7));

        let failure = Outcome::<i32>::try_new(false, None, "nope").expect("consistent failure");
        assert_eq!(failure.error(), "nope");
    }

    #[test]
    fn map_skips_mapper_on_failure() {
        let called = Cell::new(false);
        let outcome = Outcome::<i32>::failure("original").map(|x| {
            called.set(true);
            x + 1
        });
        assert!(!called.get());
        assert_eq!(outcome.error(), "original");
    }

    #[test]
    fn bind_short_circuits_chain() {
        let called = Cell::new(0_u8);
        let outcome = Outcome::success(1)
            .bind(|_| Outcome::<i32>::failure("first"))
            .bind(|x| {
                called.set(called.get() + 1);
                Outcome::success(x)
            });
        assert_eq!(called.get(), 0);
        assert_eq!(outcome.error(), "first");
    }

    #[test]
    fn bind_returns_binder_result_on_success() {
        let outcome = Outcome::success(2).bind(|x| Outcome::success(x.to_string()));
        assert_eq!(outcome.value().map(String::as_str), Some("2"));
    }

    #[rstest]
    #[case(5, Some(10), "")]
    #[case(-5, None, "must be positive")]
    fn ensure_then_map_follows_railway(
        #[case] input: i32,
        #[case] expected_value: Option<i32>,
        #[case] expected_error: &str,
    ) {
        let outcome = Outcome::success(input)
            .ensure(|x| *x > 0, "must be positive")
            .map(|x| x * 2);
        assert_eq!(outcome.value().copied(), expected_value);
        assert_eq!(outcome.error(), expected_error);
    }

    #[test]
    fn ensure_leaves_failure_untouched() {
        let called = Cell::new(false);
        let outcome = Outcome::<i32>::failure("earlier").ensure(
            |_| {
                called.set(true);
                false
            },
            "later",
        );
        assert!(!called.get());
        assert_eq!(outcome.error(), "earlier");
    }

    #[test]
    fn hooks_run_conditionally_and_return_outcome_unchanged() {
        let seen_value = Cell::new(0);
        let seen_failure = Cell::new(false);

        let outcome = Outcome::success(3)
            .on_success(|x| seen_value.set(*x))
            .on_failure(|_| seen_failure.set(true));
        assert_eq!(seen_value.get(), 3);
        assert!(!seen_failure.get());
        assert_eq!(outcome.value(), Some(&3));

        let outcome = Outcome::<i32>::failure("bad")
            .on_success(|x| seen_value.set(*x + 100))
            .on_failure(|_| seen_failure.set(true));
        assert_eq!(seen_value.get(), 3);
        assert!(seen_failure.get());
        assert_eq!(outcome.error(), "bad");
    }

    #[rstest]
    #[case(String::from("context: bad"), "context: bad")]
    #[case(String::new(), "bad")]
    fn map_err_keeps_message_non_empty(#[case] rewrite: String, #[case] expected: &str) {
        let outcome = Outcome::<()>::failure("bad").map_err(|_| rewrite);
        assert_eq!(outcome.error(), expected);
    }

    #[test]
    fn from_result_renders_error_text() {
        let outcome: Outcome<u8> = Outcome::from_result("300".parse::<u8>());
        assert!(outcome.is_failure());
        assert!(!outcome.error().is_empty());
    }

    #[test]
    fn into_result_round_trips_failure_message() {
        let err = Outcome::<()>::failure("Student not found")
            .into_result()
            .expect_err("failure converts to Err");
        assert_eq!(err.as_str(), "Student not found");
    }

    #[tokio::test]
    async fn map_async_applies_mapper_on_success() {
        let outcome = Outcome::success(4)
            .map_async(|x| async move { x * 3 })
            .await;
        assert_eq!(outcome.value(), Some(&12));
    }

    #[tokio::test]
    async fn async_combinators_do_not_poll_on_failure() {
        let polled = Cell::new(false);
        let outcome = Outcome::<i32>::failure("stop")
            .bind_async(|x| {
                polled.set(true);
                async move { Outcome::success(x) }
            })
            .await
            .map_async(|x| {
                polled.set(true);
                async move { x + 1 }
            })
            .await;
        assert!(!polled.get());
        assert_eq!(outcome.error(), "stop");
    }

    #[tokio::test]
    async fn bind_async_returns_inner_failure() {
        let outcome = Outcome::success(1)
            .bind_async(|_| async { Outcome::<i32>::failure("inner") })
            .await;
        assert_eq!(outcome.error(), "inner");
    }
}
