//! Presence helpers bridging [`Option`] into the railway.
//!
//! Rust's [`Option`] already is the two-variant presence type (`Some` /
//! `None`), so these helpers only add the conversions the service layer
//! needs: lifting nullable inputs and turning absence into a typed failure.

use crate::Either;

/// Lift a possibly absent value into an [`Option`].
///
/// Accepts both plain values (always present) and `Option`s (passed
/// through), which keeps adapter code symmetric regardless of how the
/// caller models absence.
///
/// # Examples
/// ```
/// use railway::from_nullable;
///
/// assert_eq!(from_nullable(5), Some(5));
/// let absent: Option<i32> = from_nullable(None::<i32>);
/// assert_eq!(absent, None);
/// ```
pub fn from_nullable<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

/// Turn presence into success and absence into `Left(left)`.
///
/// # Examples
/// ```
/// use railway::{Either, to_either};
///
/// assert_eq!(to_either(Some(1), "missing"), Either::Right(1));
/// assert_eq!(to_either(None::<i32>, "missing"), Either::Left("missing"));
/// ```
pub fn to_either<L, T>(option: Option<T>, left: L) -> Either<L, T> {
    match option {
        Some(value) => Either::Right(value),
        None => Either::Left(left),
    }
}

/// Railway extensions for [`Option`].
pub trait OptionExt<T> {
    /// Method form of [`to_either`].
    fn to_either<L>(self, left: L) -> Either<L, T>;

    /// Like [`OptionExt::to_either`] but builds the failure lazily.
    fn to_either_with<L>(self, left: impl FnOnce() -> L) -> Either<L, T>;

    /// Dispatch on presence; exactly one closure runs.
    fn fold<U>(self, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U;
}

impl<T> OptionExt<T> for Option<T> {
    fn to_either<L>(self, left: L) -> Either<L, T> {
        to_either(self, left)
    }

    fn to_either_with<L>(self, left: impl FnOnce() -> L) -> Either<L, T> {
        match self {
            Some(value) => Either::Right(value),
            None => Either::Left(left()),
        }
    }

    fn fold<U>(self, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn lazy_failure_is_only_built_when_absent() {
        let built = Cell::new(0);
        let present = Some(3).to_either_with(|| {
            built.set(built.get() + 1);
            "missing"
        });
        assert_eq!(present, Either::Right(3));
        assert_eq!(built.get(), 0);

        let absent = None::<i32>.to_either_with(|| {
            built.set(built.get() + 1);
            "missing"
        });
        assert_eq!(absent, Either::Left("missing"));
        assert_eq!(built.get(), 1);
    }

    #[rstest]
    #[case(Some(2), "some 2")]
    #[case(None, "none")]
    fn fold_covers_both_cases(#[case] option: Option<i32>, #[case] expected: &str) {
        let rendered = option.fold(|value| format!("some {value}"), || "none".to_owned());
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn method_and_free_function_agree() {
        assert_eq!(Some("a").to_either(0), to_either(Some("a"), 0));
        assert_eq!(None::<&str>.to_either(0), Either::Left(0));
    }
}
