//! Two-variant success/failure type.
//!
//! `Left` carries the failure and `Right` the success ("right is right").
//! Conversions to and from [`Result`] are explicit so the two never coerce
//! silently into each other.

use serde::{Deserialize, Serialize};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Examples
/// ```
/// use railway::Either;
///
/// let doubled = Either::<String, i32>::Right(21).map_right(|value| value * 2);
/// assert_eq!(doubled, Either::Right(42));
///
/// let untouched = Either::<String, i32>::Left("boom".to_owned()).map_right(|value| value * 2);
/// assert_eq!(untouched, Either::Left("boom".to_owned()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Either<L, R> {
    /// Failure branch.
    Left(L),
    /// Success branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Return `true` for the failure branch.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Return `true` for the success branch.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Consume the value, keeping only the failure.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// Consume the value, keeping only the success.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    /// Borrow both branches.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Dispatch on the active branch and collapse both into one value.
    ///
    /// Exactly one of the two closures runs.
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
        }
    }

    /// Transform the success value; a `Left` is returned unchanged and `f`
    /// is never invoked for it.
    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(f(right)),
        }
    }

    /// Transform the failure value; a `Right` is returned unchanged.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(left) => Either::Left(f(left)),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Sequence a step that can itself fail.
    ///
    /// A `Left` short-circuits: `f` is skipped and the original failure is
    /// propagated unchanged.
    ///
    /// # Examples
    /// ```
    /// use railway::Either;
    ///
    /// fn halve(value: i32) -> Either<String, i32> {
    ///     if value % 2 == 0 {
    ///         Either::Right(value / 2)
    ///     } else {
    ///         Either::Left(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::Right(8).bind(halve).bind(halve), Either::Right(2));
    /// assert_eq!(
    ///     Either::Right(6).bind(halve).bind(halve),
    ///     Either::Left("3 is odd".to_owned())
    /// );
    /// ```
    pub fn bind<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => f(right),
        }
    }

    /// Run a side effect on the success value and hand the value back.
    pub fn tap(self, f: impl FnOnce(&R)) -> Self {
        if let Self::Right(right) = &self {
            f(right);
        }
        self
    }

    /// Return the success value or `default` for a failure.
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(right) => right,
        }
    }

    /// Return the success value or derive one from the failure.
    pub fn right_or_else(self, f: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Left(left) => f(left),
            Self::Right(right) => right,
        }
    }

    /// Convert into the standard library [`Result`] so `?` can be used.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(left) => Err(left),
            Self::Right(right) => Ok(right),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(right) => Self::Right(right),
            Err(left) => Self::Left(left),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}
