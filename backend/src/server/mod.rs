//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use backend::Trace;
use backend::middleware::cors_policy;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::examples;
use backend::inbound::http::health::{HealthState, health, live, ready};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors)
        .wrap(Trace)
        .configure(examples::configure)
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener. The
/// health state is marked ready once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        examples,
        cors_origins,
    } = config;
    let http_state = web::Data::new(HttpState::new(examples));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            cors_policy(&cors_origins),
        )
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "server listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{Method, StatusCode, header};
    use actix_web::test;
    use backend::domain::ExampleHandler;
    use backend::outbound::memory::InMemoryExampleRepository;
    use backend::settings::CorsOrigins;
    use rstest::rstest;

    use super::*;

    fn states() -> (web::Data<HealthState>, web::Data<HttpState>) {
        let examples = Arc::new(ExampleHandler::from_repository(Arc::new(
            InMemoryExampleRepository::new(),
        )));
        (
            web::Data::new(HealthState::new("Rust Template", "1.0.0")),
            web::Data::new(HttpState::new(examples)),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn examples_answer_cors_preflight() {
        let (health_state, http_state) = states();
        let origins = CorsOrigins::List(vec!["https://app.test".to_owned()]);
        let app = test::init_service(build_app(health_state, http_state, cors_policy(&origins))).await;

        let request = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/examples")
            .insert_header((header::ORIGIN, "https://app.test"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("https://app.test")
        );
        assert!(response.headers().contains_key("trace-id"));
    }

    #[rstest]
    #[actix_web::test]
    async fn health_is_served_next_to_examples() {
        let (health_state, http_state) = states();
        let app =
            test::init_service(build_app(health_state, http_state, cors_policy(&CorsOrigins::Any)))
                .await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
