//! Value-level capture of failures raised by foreign code.
//!
//! [`try_of`] runs a computation and records either its value or the
//! failure it produced, whether returned as an error or raised as a panic.
//! [`Try::to_either`] then moves the outcome onto the railway.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures_util::FutureExt;

use crate::captured::BoxError;
use crate::combinators::captured_panic;
use crate::{CapturedError, Either, ErrorResult};

/// Result of a guarded computation.
#[derive(Debug)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation returned an error or panicked.
    Failure(CapturedError),
}

/// Run `f`, capturing its error or any panic it raises.
///
/// # Examples
/// ```
/// use railway::{Either, try_of};
///
/// let parsed = try_of(|| "x".parse::<i32>()).to_either();
/// let error = parsed.left().expect("not a number");
/// assert!(error.is_exception());
/// assert_eq!(error.first_message(), "invalid digit found in string");
/// ```
pub fn try_of<T, E, F>(f: F) -> Try<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Try::Success(value),
        Ok(Err(error)) => Try::Failure(CapturedError::from_error(error)),
        Err(payload) => Try::Failure(captured_panic(payload)),
    }
}

/// Async form of [`try_of`]; the future is awaited exactly once.
pub async fn try_of_async<T, E, F, Fut>(f: F) -> Try<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    let future = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(future) => future,
        Err(payload) => return Try::Failure(captured_panic(payload)),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => Try::Success(value),
        Ok(Err(error)) => Try::Failure(CapturedError::from_error(error)),
        Err(payload) => Try::Failure(captured_panic(payload)),
    }
}

impl<T> Try<T> {
    /// `true` when a value was produced.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` when the computation failed.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transform the value; a panic inside `f` becomes a failure.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Try<U> {
        match self {
            Self::Success(value) => try_of(|| Ok::<_, BoxError>(f(value))),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Sequence another guarded computation.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Try<U>) -> Try<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// `Right(value)`, or an exception [`ErrorResult`] carrying the failure's
    /// message.
    pub fn to_either(self) -> Either<ErrorResult, T> {
        self.to_either_with(|error| ErrorResult::from_exception(&error))
    }

    /// Like [`Try::to_either`] with a caller-chosen failure mapping.
    pub fn to_either_with<L>(self, on_error: impl FnOnce(CapturedError) -> L) -> Either<L, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(on_error(error)),
        }
    }

    /// Return the value or `default`.
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Return the value or compute one from the failure.
    pub fn get_or_else(self, on_failure: impl FnOnce(CapturedError) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Retry from a failure with `f`, itself guarded by [`try_of`].
    #[must_use]
    pub fn recover<E, F>(self, f: F) -> Self
    where
        F: FnOnce(CapturedError) -> Result<T, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => try_of(|| f(error)),
        }
    }

    /// Replace a failure with whatever `f` returns.
    #[must_use]
    pub fn recover_with(self, f: impl FnOnce(CapturedError) -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => f(error),
        }
    }
}
