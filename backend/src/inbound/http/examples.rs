//! Example CRUD handlers.
//!
//! ```text
//! POST   /examples
//! GET    /examples?page=&page_size=
//! GET    /examples/{id}
//! PUT    /examples/{id}
//! DELETE /examples/{id}
//! POST   /examples/{id}/activate
//! POST   /examples/{id}/deactivate
//! ```
//!
//! Domain failures come back inside the [`ApiResponse`] envelope, except
//! `not_found` on single-record reads and writes, which is rejected with 404.

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::PaginatedResult;
use railway::{Either, ErrorResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{
    CreateExampleCommand, ExampleView, GetByIdQuery, ListAllQuery, UpdateExampleCommand,
};
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::error::{Rejection, json_config, path_config, query_config};
use crate::inbound::http::schemas::{
    EmptyEnvelopeSchema, ExampleEnvelopeSchema, ExamplePageEnvelopeSchema, RejectionSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{page_request, validate_create, validate_update};

/// Request payload for creating an example.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateExampleRequest {
    #[schema(min_length = 1, max_length = 100, example = "Test")]
    pub name: String,
    #[serde(default)]
    #[schema(max_length = 500)]
    pub description: String,
    #[serde(default)]
    #[schema(minimum = 0)]
    pub value: i64,
}

/// Request payload for a partial update; absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateExampleRequest {
    #[schema(min_length = 1, max_length = 100)]
    pub name: Option<String>,
    #[schema(max_length = 500)]
    pub description: Option<String>,
    #[schema(minimum = 0)]
    pub value: Option<i64>,
}

/// Query parameters for listing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListExamplesParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Response payload for one example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExampleResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub value: i64,
    #[schema(example = "pending")]
    pub status: String,
}

impl From<ExampleView> for ExampleResponse {
    fn from(value: ExampleView) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            value: value.value,
            status: value.status,
        }
    }
}

/// Envelope the outcome, rejecting `not_found` with 404.
fn envelope_or_reject<T>(outcome: Either<ErrorResult, T>) -> Result<ApiResponse<T>, Rejection> {
    match outcome {
        Either::Left(error) if error.is_not_found() => {
            Err(Rejection::not_found(error.first_message()))
        }
        other => Ok(ApiResponse::from_either(other)),
    }
}

fn example_envelope(
    outcome: Either<ErrorResult, ExampleView>,
) -> Result<web::Json<ApiResponse<ExampleResponse>>, Rejection> {
    envelope_or_reject(outcome.map_right(ExampleResponse::from)).map(web::Json)
}

/// Create an example.
///
/// Answers 201 even when the use case fails; the envelope carries the error.
#[utoipa::path(
    post,
    path = "/examples",
    request_body = CreateExampleRequest,
    responses(
        (status = 201, description = "Creation outcome", body = ExampleEnvelopeSchema),
        (status = 422, description = "Request constraint violated", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "createExample"
)]
#[post("/examples")]
pub async fn create_example(
    state: web::Data<HttpState>,
    payload: web::Json<CreateExampleRequest>,
) -> Result<HttpResponse, Rejection> {
    let CreateExampleRequest {
        name,
        description,
        value,
    } = payload.into_inner();
    validate_create(&name, &description, value)?;

    let outcome = state
        .examples
        .create(CreateExampleCommand {
            name,
            description,
            value,
        })
        .await;
    Ok(HttpResponse::Created().json(ApiResponse::from_either(
        outcome.map_right(ExampleResponse::from),
    )))
}

/// List live examples one page at a time.
#[utoipa::path(
    get,
    path = "/examples",
    params(
        ("page" = Option<usize>, Query, description = "One-based page number, default 1"),
        ("page_size" = Option<usize>, Query, description = "Items per page, default 10; 0 selects an empty page")
    ),
    responses(
        (status = 200, description = "Page of examples", body = ExamplePageEnvelopeSchema),
        (status = 422, description = "Invalid page coordinates", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "listExamples"
)]
#[get("/examples")]
pub async fn list_examples(
    state: web::Data<HttpState>,
    query: web::Query<ListExamplesParams>,
) -> Result<web::Json<ApiResponse<PaginatedResult<ExampleResponse>>>, Rejection> {
    let ListExamplesParams { page, page_size } = query.into_inner();
    let page = page_request(page, page_size)?;

    let listed = state.examples.list_all(ListAllQuery { page }).await;
    Ok(web::Json(ApiResponse::success(
        listed.map(ExampleResponse::from),
    )))
}

/// Fetch one example.
#[utoipa::path(
    get,
    path = "/examples/{id}",
    params(("id" = Uuid, Path, description = "Example identifier")),
    responses(
        (status = 200, description = "Example", body = ExampleEnvelopeSchema),
        (status = 404, description = "Unknown or deleted example", body = RejectionSchema),
        (status = 422, description = "Malformed identifier", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "getExample"
)]
#[get("/examples/{id}")]
pub async fn get_example(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> Result<web::Json<ApiResponse<ExampleResponse>>, Rejection> {
    let id = path.into_inner();
    example_envelope(state.examples.get_by_id(GetByIdQuery { id }).await)
}

/// Partially update an example.
#[utoipa::path(
    put,
    path = "/examples/{id}",
    params(("id" = Uuid, Path, description = "Example identifier")),
    request_body = UpdateExampleRequest,
    responses(
        (status = 200, description = "Update outcome", body = ExampleEnvelopeSchema),
        (status = 404, description = "Unknown or deleted example", body = RejectionSchema),
        (status = 422, description = "Request constraint violated", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "updateExample"
)]
#[put("/examples/{id}")]
pub async fn update_example(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateExampleRequest>,
) -> Result<web::Json<ApiResponse<ExampleResponse>>, Rejection> {
    let UpdateExampleRequest {
        name,
        description,
        value,
    } = payload.into_inner();
    validate_update(name.as_deref(), description.as_deref(), value)?;

    let outcome = state
        .examples
        .update(UpdateExampleCommand {
            id: path.into_inner(),
            name,
            description,
            value,
        })
        .await;
    example_envelope(outcome)
}

/// Soft delete an example. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/examples/{id}",
    params(("id" = Uuid, Path, description = "Example identifier")),
    responses(
        (status = 200, description = "Deletion outcome", body = EmptyEnvelopeSchema),
        (status = 422, description = "Malformed identifier", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "deleteExample"
)]
#[delete("/examples/{id}")]
pub async fn delete_example(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> web::Json<ApiResponse<()>> {
    let outcome = state.examples.delete(path.into_inner()).await;
    web::Json(ApiResponse::from_either(outcome))
}

/// Activate an example.
#[utoipa::path(
    post,
    path = "/examples/{id}/activate",
    params(("id" = Uuid, Path, description = "Example identifier")),
    responses(
        (status = 200, description = "Activation outcome", body = ExampleEnvelopeSchema),
        (status = 404, description = "Unknown or deleted example", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "activateExample"
)]
#[post("/examples/{id}/activate")]
pub async fn activate_example(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> Result<web::Json<ApiResponse<ExampleResponse>>, Rejection> {
    example_envelope(state.examples.activate(path.into_inner()).await)
}

/// Deactivate an active example.
#[utoipa::path(
    post,
    path = "/examples/{id}/deactivate",
    params(("id" = Uuid, Path, description = "Example identifier")),
    responses(
        (status = 200, description = "Deactivation outcome", body = ExampleEnvelopeSchema),
        (status = 404, description = "Unknown or deleted example", body = RejectionSchema)
    ),
    tags = ["examples"],
    operation_id = "deactivateExample"
)]
#[post("/examples/{id}/deactivate")]
pub async fn deactivate_example(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> Result<web::Json<ApiResponse<ExampleResponse>>, Rejection> {
    example_envelope(state.examples.deactivate(path.into_inner()).await)
}

/// Register every example route plus the 422 extractor configs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(create_example)
        .service(list_examples)
        .service(get_example)
        .service(update_example)
        .service(delete_example)
        .service(activate_example)
        .service(deactivate_example);
}

#[cfg(test)]
#[path = "examples_tests.rs"]
mod tests;
