//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod examples;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use envelope::ApiResponse;
pub use error::Rejection;
