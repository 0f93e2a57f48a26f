//! Backend entry-point: loads settings, installs tracing and serves the
//! example REST API with health probes and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::info;

use backend::domain::ExampleHandler;
use backend::inbound::http::health::HealthState;
use backend::outbound::memory::InMemoryExampleRepository;
use backend::settings::AppSettings;
use backend::telemetry;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    telemetry::init(&settings).wrap_err("failed to initialise tracing")?;

    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;
    let cors_origins = settings.cors_origins().wrap_err("invalid cors origins")?;
    let examples = Arc::new(ExampleHandler::from_repository(Arc::new(
        InMemoryExampleRepository::new(),
    )));
    let health_state = web::Data::new(HealthState::new(
        settings.app_name(),
        settings.app_version(),
    ));

    info!(
        app = settings.app_name(),
        version = settings.app_version(),
        debug = settings.debug,
        "starting"
    );
    let config = ServerConfig::new(bind_addr, examples).with_cors_origins(cors_origins);
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated abnormally")
}
