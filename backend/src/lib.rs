//! Backend library modules.
//!
//! A hexagonal layout: [`domain`] holds the `Example` aggregate, its rules
//! and use cases; [`outbound`] implements the storage port; [`inbound`]
//! exposes the use cases over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
pub mod telemetry;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
