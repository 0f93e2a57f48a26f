//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving port and remain testable with a mock.

use std::sync::Arc;

use crate::domain::ports::ExampleUseCases;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub examples: Arc<dyn ExampleUseCases>,
}

impl HttpState {
    /// Bundle the example use cases.
    pub fn new(examples: Arc<dyn ExampleUseCases>) -> Self {
        Self { examples }
    }
}
