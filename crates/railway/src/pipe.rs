//! Fluent value pipelines.

use std::future::Future;

/// Wrap `value` for fluent composition.
///
/// # Examples
/// ```
/// use railway::pipe;
///
/// let label = pipe("   ")
///     .map(str::trim)
///     .filter(|name| !name.is_empty(), "anonymous")
///     .map(str::to_owned)
///     .value();
/// assert_eq!(label, "anonymous");
/// ```
pub const fn pipe<T>(value: T) -> Pipe<T> {
    Pipe { value }
}

/// Wrap `value` for fluent composition mixing sync and async steps.
pub const fn async_pipe<T>(value: T) -> AsyncPipe<T> {
    AsyncPipe { value }
}

/// A value threaded through a chain of plain functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe<T> {
    value: T,
}

impl<T> Pipe<T> {
    /// Transform the value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Pipe<U> {
        Pipe { value: f(self.value) }
    }

    /// Observe the value without changing it.
    #[must_use]
    pub fn tap(self, f: impl FnOnce(&T)) -> Self {
        f(&self.value);
        self
    }

    /// Apply `f` only when `condition` holds.
    #[must_use]
    pub fn when(self, condition: bool, f: impl FnOnce(T) -> T) -> Self {
        if condition { self.map(f) } else { self }
    }

    /// Apply `f` only when `predicate` accepts the current value.
    #[must_use]
    pub fn when_pred(self, predicate: impl FnOnce(&T) -> bool, f: impl FnOnce(T) -> T) -> Self {
        let matched = predicate(&self.value);
        self.when(matched, f)
    }

    /// Apply `f` only when `condition` does not hold.
    #[must_use]
    pub fn unless(self, condition: bool, f: impl FnOnce(T) -> T) -> Self {
        self.when(!condition, f)
    }

    /// Keep the value when `predicate` accepts it, otherwise swap in `default`.
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool, default: T) -> Self {
        if predicate(&self.value) {
            self
        } else {
            Self { value: default }
        }
    }

    /// Unwrap the final value.
    pub fn value(self) -> T {
        self.value
    }
}

/// Like [`Pipe`], with steps that may await.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsyncPipe<T> {
    value: T,
}

impl<T> AsyncPipe<T> {
    /// Transform the value synchronously.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AsyncPipe<U> {
        AsyncPipe { value: f(self.value) }
    }

    /// Transform the value with an async function.
    pub async fn map_async<U, F, Fut>(self, f: F) -> AsyncPipe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        AsyncPipe {
            value: f(self.value).await,
        }
    }

    /// Observe the value synchronously.
    #[must_use]
    pub fn tap(self, f: impl FnOnce(&T)) -> Self {
        f(&self.value);
        self
    }

    /// Observe the value with an async effect; the future must not borrow it.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        f(&self.value).await;
        self
    }

    /// Unwrap the final value.
    pub fn value(self) -> T {
        self.value
    }
}
