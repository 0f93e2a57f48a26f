//! Railway-oriented combinators over [`Either`].
//!
//! Each step either stays on the success track or switches to the failure
//! track, after which every later step is skipped. Operands are evaluated
//! strictly left to right and nothing here spawns work; the async variants
//! await the wrapped future exactly once before continuing.
//!
//! [`try_catch`] and [`try_catch_async`] are the boundary adapters: they
//! convert both returned errors and panics raised by the wrapped code into a
//! `Left`.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures_util::FutureExt;
use tracing::warn;

use crate::captured::BoxError;
use crate::{CapturedError, Either};

/// Next pipeline stage; equivalent to [`Either::bind`].
pub fn then<L, R, T>(either: Either<L, R>, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
    either.bind(f)
}

/// Async form of [`then`]. The continuation runs only after `f`'s future
/// completes, and is skipped entirely for a `Left`.
pub async fn then_async<L, R, T, F, Fut>(either: Either<L, R>, f: F) -> Either<L, T>
where
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = Either<L, T>>,
{
    match either {
        Either::Left(left) => Either::Left(left),
        Either::Right(right) => f(right).await,
    }
}

/// Run a side effect on the success value and return the input unchanged.
pub fn tap<L, R>(either: Either<L, R>, f: impl FnOnce(&R)) -> Either<L, R> {
    either.tap(f)
}

/// Async form of [`tap`].
///
/// The returned future must not borrow the value; copy out what the effect
/// needs before entering the `async` block.
pub async fn tap_async<L, R, F, Fut>(either: Either<L, R>, f: F) -> Either<L, R>
where
    F: FnOnce(&R) -> Fut,
    Fut: Future<Output = ()>,
{
    if let Either::Right(right) = &either {
        f(right).await;
    }
    either
}

/// Run `f`, turning its error or any panic it raises into
/// `Left(on_error(captured))`.
///
/// # Examples
/// ```
/// use railway::{Either, ErrorResult, try_catch};
///
/// let parsed = try_catch(|| "17".parse::<i32>(), |err| ErrorResult::from_exception(&err));
/// assert_eq!(parsed, Either::Right(17));
///
/// let failed = try_catch(|| "x".parse::<i32>(), |err| ErrorResult::from_exception(&err));
/// assert!(failed.left().is_some_and(|err| err.is_exception()));
/// ```
pub fn try_catch<T, E, L, F, H>(f: F, on_error: H) -> Either<L, T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
    H: FnOnce(CapturedError) -> L,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Either::Right(value),
        Ok(Err(error)) => Either::Left(on_error(CapturedError::from_error(error))),
        Err(payload) => Either::Left(on_error(captured_panic(payload))),
    }
}

/// Async form of [`try_catch`]. Panics raised while building or polling the
/// future are captured as well.
pub async fn try_catch_async<T, E, L, F, Fut, H>(f: F, on_error: H) -> Either<L, T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
    H: FnOnce(CapturedError) -> L,
{
    let future = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(future) => future,
        Err(payload) => return Either::Left(on_error(captured_panic(payload))),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => Either::Right(value),
        Ok(Err(error)) => Either::Left(on_error(CapturedError::from_error(error))),
        Err(payload) => Either::Left(on_error(captured_panic(payload))),
    }
}

pub(crate) fn captured_panic(payload: Box<dyn std::any::Any + Send>) -> CapturedError {
    let captured = CapturedError::from_panic(payload);
    warn!(error = %captured, "panic captured at railway boundary");
    captured
}

/// `Right(value)` when `predicate` holds, otherwise `Left(error)`.
pub fn ensure<L, R>(value: R, predicate: impl FnOnce(&R) -> bool, error: L) -> Either<L, R> {
    if predicate(&value) {
        Either::Right(value)
    } else {
        Either::Left(error)
    }
}

/// Pick one of two pipelines; only the chosen one runs.
pub fn when<L, R>(
    condition: bool,
    on_true: impl FnOnce() -> Either<L, R>,
    on_false: impl FnOnce() -> Either<L, R>,
) -> Either<L, R> {
    if condition { on_true() } else { on_false() }
}

/// Tuples of one to six [`Either`]s sharing a failure type that can be
/// collapsed into a single `Either` of a tuple.
pub trait CombineAll {
    /// `Either<L, (A, B, ..)>` for an input of `(Either<L, A>, Either<L, B>, ..)`.
    type Output;

    /// Collapse the tuple; the first `Left` from the left wins.
    fn combine_all(self) -> Self::Output;
}

macro_rules! impl_combine_all {
    ($($slot:ident : $ty:ident),+) => {
        impl<L, $($ty),+> CombineAll for ($(Either<L, $ty>,)+) {
            type Output = Either<L, ($($ty,)+)>;

            fn combine_all(self) -> Self::Output {
                let ($($slot,)+) = self;
                $(
                    let $slot = match $slot {
                        Either::Right(value) => value,
                        Either::Left(error) => return Either::Left(error),
                    };
                )+
                Either::Right(($($slot,)+))
            }
        }
    };
}

impl_combine_all!(a: A);
impl_combine_all!(a: A, b: B);
impl_combine_all!(a: A, b: B, c: C);
impl_combine_all!(a: A, b: B, c: C, d: D);
impl_combine_all!(a: A, b: B, c: C, d: D, e: E);
impl_combine_all!(a: A, b: B, c: C, d: D, e: E, f: F);

/// Collapse a tuple of results: `Right` of all values, or the first `Left`.
///
/// # Examples
/// ```
/// use railway::{Either, combine_all};
///
/// let all = combine_all((
///     Either::<&str, i32>::Right(1),
///     Either::<&str, i32>::Right(2),
///     Either::<&str, i32>::Right(3),
/// ));
/// assert_eq!(all, Either::Right((1, 2, 3)));
///
/// let first_failure = combine_all((
///     Either::<&str, i32>::Right(1),
///     Either::<&str, i32>::Left("e"),
///     Either::<&str, i32>::Left("later"),
/// ));
/// assert_eq!(first_failure, Either::Left("e"));
/// ```
pub fn combine_all<C: CombineAll>(eithers: C) -> C::Output {
    eithers.combine_all()
}

/// Homogeneous form of [`combine_all`]; stops consuming at the first `Left`.
pub fn combine_iter<L, R, I>(eithers: I) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers
        .into_iter()
        .map(Either::into_result)
        .collect::<Result<Vec<R>, L>>()
        .into()
}

#[cfg(test)]
mod tests {
    //! Short-circuit and capture behaviour of the combinators.

    use std::cell::{Cell, RefCell};
    use std::io;

    use rstest::rstest;

    use super::*;
    use crate::ErrorResult;

    #[rstest]
    fn then_is_bind() {
        let next = then(Either::<&str, i32>::Right(4), |x| Either::Right(x * 2));
        assert_eq!(next, Either::Right(8));
        let skipped = then(Either::<&str, i32>::Left("stop"), |x| Either::Right(x * 2));
        assert_eq!(skipped, Either::Left("stop"));
    }

    #[rstest]
    fn tap_runs_only_on_success() {
        let calls = Cell::new(0);
        let right = tap(Either::<&str, i32>::Right(1), |_| calls.set(calls.get() + 1));
        let left = tap(Either::<&str, i32>::Left("e"), |_| calls.set(calls.get() + 1));
        assert_eq!(right, Either::Right(1));
        assert_eq!(left, Either::Left("e"));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn try_catch_wraps_success() {
        let result = try_catch(|| Ok::<_, io::Error>(5), |err| err.to_string());
        assert_eq!(result, Either::Right(5));
    }

    #[rstest]
    fn try_catch_maps_returned_error() {
        let result = try_catch(
            || Err::<i32, _>(io::Error::other("denied")),
            |err| ErrorResult::from_exception(&err),
        );
        let error = result.left().expect("error captured");
        assert!(error.is_exception());
        assert_eq!(error.first_message(), "denied");
    }

    #[rstest]
    fn try_catch_captures_panics() {
        let result: Either<String, i32> = try_catch(
            || -> Result<i32, io::Error> { panic!("kaboom") },
            |err| {
                assert!(err.is_panic());
                err.to_string()
            },
        );
        assert_eq!(result, Either::Left("kaboom".to_owned()));
    }

    #[rstest]
    #[case(4, true)]
    #[case(-4, false)]
    fn ensure_checks_predicate(#[case] value: i32, #[case] passes: bool) {
        let result = ensure(value, |v| *v > 0, "must be positive");
        assert_eq!(result.is_right(), passes);
    }

    #[rstest]
    fn when_runs_only_selected_branch() {
        let ran = RefCell::new(Vec::new());
        let result = when(
            false,
            || {
                ran.borrow_mut().push("true");
                Either::<&str, i32>::Right(1)
            },
            || {
                ran.borrow_mut().push("false");
                Either::<&str, i32>::Right(2)
            },
        );
        assert_eq!(result, Either::Right(2));
        assert_eq!(*ran.borrow(), vec!["false"]);
    }

    #[rstest]
    fn combine_all_mixed_types() {
        let combined = combine_all((
            Either::<&str, i32>::Right(1),
            Either::<&str, &str>::Right("two"),
        ));
        assert_eq!(combined, Either::Right((1, "two")));
    }

    #[rstest]
    fn combine_all_single_element() {
        assert_eq!(
            combine_all((Either::<&str, i32>::Right(7),)),
            Either::Right((7,))
        );
    }

    #[rstest]
    fn combine_all_six_elements() {
        let all = combine_all((
            Either::<&str, u8>::Right(1),
            Either::<&str, u8>::Right(2),
            Either::<&str, u8>::Right(3),
            Either::<&str, u8>::Right(4),
            Either::<&str, u8>::Right(5),
            Either::<&str, u8>::Right(6),
        ));
        assert_eq!(all, Either::Right((1, 2, 3, 4, 5, 6)));

        let sixth_fails = combine_all((
            Either::<&str, u8>::Right(1),
            Either::<&str, u8>::Right(2),
            Either::<&str, u8>::Right(3),
            Either::<&str, u8>::Right(4),
            Either::<&str, u8>::Right(5),
            Either::<&str, u8>::Left("sixth"),
        ));
        assert_eq!(sixth_fails, Either::Left("sixth"));
    }

    #[rstest]
    fn combine_all_returns_first_left() {
        let combined = combine_all((
            Either::<&str, i32>::Left("first"),
            Either::<&str, i32>::Left("second"),
        ));
        assert_eq!(combined, Either::Left("first"));
    }

    #[rstest]
    fn combine_iter_stops_at_first_failure() {
        let pulled = Cell::new(0);
        let items = [Either::Right(1), Either::Left("bad"), Either::Right(3)]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));
        assert_eq!(combine_iter(items), Either::Left("bad"));
        assert_eq!(pulled.get(), 2);

        let all: Either<&str, Vec<i32>> = combine_iter([Either::Right(1), Either::Right(2)]);
        assert_eq!(all, Either::Right(vec![1, 2]));
    }

    #[tokio::test]
    async fn then_async_awaits_before_continuing() {
        let log = RefCell::new(Vec::new());
        let result = then_async(Either::<&str, i32>::Right(3), |value| {
            log.borrow_mut().push("started");
            async move {
                tokio::task::yield_now().await;
                Either::Right(value + 1)
            }
        })
        .await;
        log.borrow_mut().push("continued");
        assert_eq!(result, Either::Right(4));
        assert_eq!(*log.borrow(), vec!["started", "continued"]);
    }

    #[tokio::test]
    async fn then_async_skips_on_failure() {
        let calls = Cell::new(0);
        let result = then_async(Either::<&str, i32>::Left("e"), |value| {
            calls.set(calls.get() + 1);
            async move { Either::<&str, i32>::Right(value) }
        })
        .await;
        assert_eq!(result, Either::Left("e"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn tap_async_leaves_value_unchanged() {
        let seen = Cell::new(0);
        let result = tap_async(Either::<&str, i32>::Right(9), |value| {
            seen.set(*value);
            async {}
        })
        .await;
        assert_eq!(result, Either::Right(9));
        assert_eq!(seen.get(), 9);
    }

    #[tokio::test]
    async fn try_catch_async_captures_error_and_panic() {
        let failed = try_catch_async(
            || async { Err::<i32, _>(io::Error::other("late failure")) },
            |err| err.to_string(),
        )
        .await;
        assert_eq!(failed, Either::Left("late failure".to_owned()));

        let panicked = try_catch_async(
            || async {
                tokio::task::yield_now().await;
                if true {
                    panic!("async kaboom");
                }
                Ok::<i32, io::Error>(1)
            },
            |err| err.to_string(),
        )
        .await;
        assert_eq!(panicked, Either::Left("async kaboom".to_owned()));

        let succeeded = try_catch_async(|| async { Ok::<_, io::Error>(2) }, |err| err.to_string()).await;
        assert_eq!(succeeded, Either::Right(2));
    }
}
