//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every example and health endpoint together with the
//! concrete envelope schemas from [`crate::inbound::http::schemas`]. The
//! document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::examples::{CreateExampleRequest, ExampleResponse, UpdateExampleRequest};
use crate::inbound::http::health::{HealthInfo, ProbeStatus};
use crate::inbound::http::schemas::{
    EmptyEnvelopeSchema, ExampleEnvelopeSchema, ExamplePageEnvelopeSchema, ExamplePageSchema,
    RejectionSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rust Template API",
        description = "Example CRUD service built on railway-style domain services."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::examples::create_example,
        crate::inbound::http::examples::list_examples,
        crate::inbound::http::examples::get_example,
        crate::inbound::http::examples::update_example,
        crate::inbound::http::examples::delete_example,
        crate::inbound::http::examples::activate_example,
        crate::inbound::http::examples::deactivate_example,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateExampleRequest,
        UpdateExampleRequest,
        ExampleResponse,
        ExampleEnvelopeSchema,
        ExamplePageSchema,
        ExamplePageEnvelopeSchema,
        EmptyEnvelopeSchema,
        RejectionSchema,
        HealthInfo,
        ProbeStatus
    )),
    tags(
        (name = "examples", description = "Example CRUD and lifecycle transitions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI path and schema registration.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name) {
            Some(RefOr::T(Schema::Object(object))) => object.properties.keys().cloned().collect(),
            other => panic!("expected object schema for {name}, got {other:?}"),
        }
    }

    #[rstest]
    #[case("/examples")]
    #[case("/examples/{id}")]
    #[case("/examples/{id}/activate")]
    #[case("/examples/{id}/deactivate")]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn registers_path(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path), "{path} missing");
    }

    #[rstest]
    #[case("ExampleEnvelopeSchema", &["error", "error_message", "result"])]
    #[case("ExamplePageSchema", &["items", "total", "page", "page_size", "total_pages"])]
    #[case("ExampleResponse", &["id", "name", "description", "value", "status"])]
    #[case("RejectionSchema", &["detail"])]
    fn schema_has_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let fields = schema_fields(name);
        for field in expected {
            assert!(fields.iter().any(|f| f == field), "{name} lacks {field}");
        }
    }

    #[rstest]
    fn example_routes_carry_every_method() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/examples/{id}").expect("item path");
        assert!(item.get.is_some() && item.put.is_some() && item.delete.is_some());
    }
}
