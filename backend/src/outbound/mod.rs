//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.
//!
//! - **memory**: process-local stores behind async locks

pub mod memory;
