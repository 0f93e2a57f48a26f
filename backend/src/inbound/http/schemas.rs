//! OpenAPI schema definitions for generic response bodies.
//!
//! [`ApiResponse`](crate::inbound::http::envelope::ApiResponse) and
//! [`PaginatedResult`](pagination::PaginatedResult) are generic and stay free
//! of `utoipa` derives. The concrete shapes each endpoint returns are spelled
//! out here so the generated document names them.

use utoipa::ToSchema;

use crate::inbound::http::examples::ExampleResponse;

/// Envelope carrying one example.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExampleEnvelopeSchema {
    /// `true` when the operation failed.
    error: bool,
    /// First error message on failure.
    #[schema(example = "Nome ja existe")]
    error_message: Option<String>,
    /// The example on success.
    result: Option<ExampleResponse>,
}

/// One page of examples.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExamplePageSchema {
    /// Examples on this page.
    items: Vec<ExampleResponse>,
    /// Live examples across every page.
    total: usize,
    /// One-based page number.
    page: usize,
    /// Requested page size.
    page_size: usize,
    /// `ceil(total / page_size)`.
    total_pages: usize,
}

/// Envelope carrying a page of examples.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExamplePageEnvelopeSchema {
    /// Always `false`; listing cannot fail once the query is valid.
    error: bool,
    /// Always null.
    error_message: Option<String>,
    /// The requested page.
    result: Option<ExamplePageSchema>,
}

/// Envelope with no result payload.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmptyEnvelopeSchema {
    /// `true` when the operation failed.
    error: bool,
    /// First error message on failure.
    error_message: Option<String>,
    /// Always null.
    #[schema(value_type = Option<Object>)]
    result: Option<serde_json::Value>,
}

/// Body of a 404 or 422 rejection.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RejectionSchema {
    /// Human-readable reason.
    #[schema(example = "Not found")]
    detail: String,
}
