//! A narrower [`Either`](crate::Either) whose failure is a plain message.

use serde::{Deserialize, Serialize};

use crate::Either;

/// Success with a value, or failure with a human-readable message.
///
/// Use it where a full [`ErrorResult`](crate::ErrorResult) category would
/// be noise, such as internal helpers that only report why they gave up.
///
/// # Examples
/// ```
/// use railway::Outcome;
///
/// let parsed = Outcome::success("12").bind(|raw| match raw.parse::<u8>() {
///     Ok(value) => Outcome::success(value),
///     Err(err) => Outcome::failure(err.to_string()),
/// });
/// assert_eq!(parsed.get_or_default(0), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a message.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Build a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Build a failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// `true` for a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for a failure.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transform the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Sequence another step that can fail.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Return the value or `default`.
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Dispatch on the active branch.
    pub fn fold<U>(self, on_success: impl FnOnce(T) -> U, on_failure: impl FnOnce(String) -> U) -> U {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(message) => on_failure(message),
        }
    }

    /// Widen into an [`Either`] with the message on the left.
    pub fn into_either(self) -> Either<String, T> {
        self.fold(Either::Right, Either::Left)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn failure_skips_map_and_bind() {
        let outcome: Outcome<i32> = Outcome::failure("nope");
        let chained = outcome.map(|x| x + 1).bind(|x| Outcome::success(x * 2));
        assert_eq!(chained, Outcome::Failure("nope".to_owned()));
        assert!(chained.is_failure());
    }

    #[rstest]
    fn success_flows_through() {
        let chained = Outcome::success(2).map(|x| x + 1).bind(|x| Outcome::success(x * 2));
        assert!(chained.is_success());
        assert_eq!(chained.into_either(), Either::Right(6));
    }

    #[rstest]
    fn fold_selects_branch() {
        let rendered = Outcome::<i32>::failure("bad").fold(|v| v.to_string(), |m| format!("!{m}"));
        assert_eq!(rendered, "!bad");
    }
}
