//! Health endpoints: an application summary plus liveness and readiness
//! probes for orchestrators and load balancers.
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared health state: application identity plus probe flags.
///
/// Starts not ready but live; the server marks it ready once bound.
#[derive(Debug)]
pub struct HealthState {
    app: String,
    version: String,
    ready: AtomicBool,
    live: AtomicBool,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthInfo {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Rust Template")]
    pub app: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

/// Body of the probe endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProbeStatus {
    #[schema(example = "ready")]
    pub status: String,
}

impl HealthState {
    /// Health state for the named application.
    pub fn new(app: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            version: version.into(),
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn info(&self) -> HealthInfo {
        HealthInfo {
            status: "healthy".to_owned(),
            app: self.app.clone(),
            version: self.version.clone(),
        }
    }

    fn probe_response(probe_ok: bool, ok: &str, failing: &str) -> HttpResponse {
        let (mut response, status) = if probe_ok {
            (HttpResponse::Ok(), ok)
        } else {
            (HttpResponse::ServiceUnavailable(), failing)
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeStatus {
                status: status.to_owned(),
            })
    }
}

/// Application name, version and a `healthy` status.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses((status = 200, description = "Service summary", body = HealthInfo))
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> web::Json<HealthInfo> {
    web::Json(state.info())
}

/// Readiness probe. Return 200 once the server is bound; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ProbeStatus),
        (status = 503, description = "Server is not ready", body = ProbeStatus)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready(), "ready", "not_ready")
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = ProbeStatus),
        (status = 503, description = "Server is shutting down", body = ProbeStatus)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive(), "alive", "draining")
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use rstest::rstest;

    use super::*;

    async fn probe(state: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>, String) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(health)
                .service(ready)
                .service(live),
        )
        .await;
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: ProbeStatus = test::read_body_json(response).await;
        (status, cache, body.status)
    }

    #[rstest]
    #[actix_web::test]
    async fn health_reports_app_identity() {
        let state = web::Data::new(HealthState::new("Rust Template", "1.0.0"));
        let app = test::init_service(App::new().app_data(state).service(health)).await;
        let info: HealthInfo =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request())
                .await;
        assert_eq!(
            info,
            HealthInfo {
                status: "healthy".to_owned(),
                app: "Rust Template".to_owned(),
                version: "1.0.0".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE, "not_ready")]
    #[case(true, StatusCode::OK, "ready")]
    #[actix_web::test]
    async fn readiness_follows_state(
        #[case] mark_ready: bool,
        #[case] expected: StatusCode,
        #[case] label: &str,
    ) {
        let state = web::Data::new(HealthState::new("app", "0"));
        if mark_ready {
            state.mark_ready();
        }
        let (status, cache, body) = probe(state, "/health/ready").await;
        assert_eq!(status, expected);
        assert_eq!(cache.as_deref(), Some("no-store"));
        assert_eq!(body, label);
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_fails_once_draining() {
        let state = web::Data::new(HealthState::new("app", "0"));
        let (status, _, body) = probe(state.clone(), "/health/live").await;
        assert_eq!((status, body.as_str()), (StatusCode::OK, "alive"));

        state.mark_unhealthy();
        let (status, _, body) = probe(state, "/health/live").await;
        assert_eq!((status, body.as_str()), (StatusCode::SERVICE_UNAVAILABLE, "draining"));
    }
}
