//! Functional primitives for composing fallible domain operations.
//!
//! The crate keeps failure on the value channel: services return
//! [`Either`] (conventionally `Left` = [`ErrorResult`], `Right` = success),
//! business rules are expressed as composable [`Specification`]s, and the
//! [`combinators`] chain steps so the first failure short-circuits
//! the remainder of a pipeline. [`Try`] and [`combinators::try_catch`] are the
//! only places where a returned error or a panic from foreign code is turned
//! into a value.
//!
//! # Example
//!
//! ```
//! use railway::{Either, ErrorResult, NotEmpty, Specification, then};
//!
//! fn parse_value(raw: &str) -> Either<ErrorResult, i64> {
//!     raw.parse::<i64>()
//!         .map_err(|err| ErrorResult::validation(err.to_string()))
//!         .into()
//! }
//!
//! let name = NotEmpty::new("Name");
//! let outcome = then(name.validate("42").map_right(str::to_owned), |raw| {
//!     parse_value(&raw)
//! });
//! assert_eq!(outcome, Either::Right(42));
//! ```

mod captured;
pub mod combinators;
mod either;
mod error_result;
mod option;
mod outcome;
mod pipe;
pub mod specification;
mod try_monad;

pub use captured::CapturedError;
pub use combinators::{
    CombineAll, combine_all, combine_iter, ensure, tap, tap_async, then, then_async, try_catch,
    try_catch_async, when,
};
pub use either::Either;
pub use error_result::{ErrorKind, ErrorResult, UNKNOWN_ERROR_MESSAGE, ValidationBuilder};
pub use option::{OptionExt, from_nullable, to_either};
pub use outcome::Outcome;
pub use pipe::{AsyncPipe, Pipe, async_pipe, pipe};
pub use specification::{
    AndSpec, InRange, MaxLength, MinLength, NotEmpty, NotSpec, OrSpec, PositiveNumber, Predicate,
    Specification,
};
pub use try_monad::{Try, try_of, try_of_async};
