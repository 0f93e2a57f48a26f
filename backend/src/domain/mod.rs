//! Domain primitives, rules and services.
//!
//! Purpose: model the `Example` aggregate and the use cases around it
//! without any transport or storage concerns. Failures travel as
//! [`railway::Either`] values carrying a [`railway::ErrorResult`].
//!
//! Public surface:
//! - [`Example`] and [`AuditFields`]: the aggregate and its audit stamps.
//! - [`Status`]: lifecycle state, lowercase on the wire.
//! - Specifications: [`NameNotEmpty`], [`ValuePositive`], [`ValueInRange`],
//!   [`ExampleActive`], [`ExampleNotDeleted`], [`example_can_be_modified`].
//! - [`ExampleService`]: business rules over an
//!   [`ExampleRepository`](ports::ExampleRepository).
//! - [`ExampleHandler`]: the [`ExampleUseCases`](ports::ExampleUseCases)
//!   implementation used by inbound adapters.

pub mod ports;

mod example;
mod example_handler;
mod example_service;
mod specifications;
mod status;

pub use self::example::{AuditFields, Example};
pub use self::example_handler::ExampleHandler;
pub use self::example_service::{DUPLICATE_NAME_MESSAGE, ExampleService, NOT_FOUND_MESSAGE};
pub use self::specifications::{
    ExampleActive, ExampleNotDeleted, NameNotEmpty, ValueInRange, ValuePositive,
    example_can_be_modified,
};
pub use self::status::{ParseStatusError, Status};
