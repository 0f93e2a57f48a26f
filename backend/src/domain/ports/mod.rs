//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`ExampleRepository`]) are implemented by outbound adapters;
//! driving ports ([`ExampleUseCases`]) are what inbound adapters call.

mod example_repository;
mod example_use_cases;

#[cfg(test)]
pub use example_repository::MockExampleRepository;
pub use example_repository::ExampleRepository;
#[cfg(test)]
pub use example_use_cases::MockExampleUseCases;
pub use example_use_cases::{
    CreateExampleCommand, ExampleUseCases, ExampleView, GetByIdQuery, ListAllQuery,
    UpdateExampleCommand,
};
