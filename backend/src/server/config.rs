//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::domain::ports::ExampleUseCases;
use backend::settings::CorsOrigins;

/// Everything [`create_server`](super::create_server) needs besides the
/// health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) examples: Arc<dyn ExampleUseCases>,
    pub(crate) cors_origins: CorsOrigins,
}

impl ServerConfig {
    /// Serve `examples` on `bind_addr`, allowing any CORS origin.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, examples: Arc<dyn ExampleUseCases>) -> Self {
        Self {
            bind_addr,
            examples,
            cors_origins: CorsOrigins::Any,
        }
    }

    /// Restrict cross-origin callers.
    #[must_use]
    pub fn with_cors_origins(mut self, origins: CorsOrigins) -> Self {
        self.cors_origins = origins;
        self
    }
}
