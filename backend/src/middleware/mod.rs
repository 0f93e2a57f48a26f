//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns; per-request trace
//! identifiers with access logging, and the CORS policy.

pub mod cors;
pub mod trace;

pub use cors::cors_policy;
pub use trace::Trace;
