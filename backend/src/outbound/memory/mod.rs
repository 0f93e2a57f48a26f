//! In-memory adapters for the domain's driven ports.

mod example_repository;

pub use example_repository::InMemoryExampleRepository;
