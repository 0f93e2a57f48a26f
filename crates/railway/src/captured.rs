//! Opaque failure captured at a `try_catch`/`try_of` boundary.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// Boxed error accepted from wrapped computations.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A failure raised by a wrapped computation: either the error it returned
/// or the payload of a panic it raised.
///
/// The [`Display`](fmt::Display) output is the error's own message, or the
/// panic message verbatim, so it can feed user-facing error summaries.
pub struct CapturedError {
    repr: Repr,
}

enum Repr {
    Error(BoxError),
    Panic(String),
}

impl CapturedError {
    /// Wrap an error returned by a computation.
    pub fn from_error(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self {
            repr: Repr::Error(error.into()),
        }
    }

    /// Wrap the payload recovered from a panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic with non-string payload".to_owned()
        };
        Self {
            repr: Repr::Panic(message),
        }
    }

    /// Return `true` when the failure came from a panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self.repr, Repr::Panic(_))
    }

    /// Borrow the returned error as a concrete type, if it is one.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match &self.repr {
            Repr::Error(error) => error.downcast_ref::<E>(),
            Repr::Panic(_) => None,
        }
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Error(error) => fmt::Display::fmt(error, f),
            Repr::Panic(message) => f.write_str(message),
        }
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Error(error) => f.debug_tuple("CapturedError::Error").field(error).finish(),
            Repr::Panic(message) => f
                .debug_tuple("CapturedError::Panic")
                .field(message)
                .finish(),
        }
    }
}

impl StdError for CapturedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.repr {
            Repr::Error(error) => Some(&**error),
            Repr::Panic(_) => None,
        }
    }
}
