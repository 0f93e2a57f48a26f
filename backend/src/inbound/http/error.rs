//! HTTP rejections.
//!
//! Purpose: failures the adapter answers outside the response envelope.
//! A [`Rejection`] renders `{"detail": message}` with its transport status;
//! request bodies, query strings and paths that fail to parse are turned
//! into `422 Unprocessable Entity` rejections through the extractor configs
//! below.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use pagination::PageRequestError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

const INTERNAL_DETAIL: &str = "Internal server error";

/// Error answered without the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {detail}")]
pub struct Rejection {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct RejectionBody<'a> {
    detail: &'a str,
}

impl Rejection {
    /// Reject with an arbitrary status.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// `404 Not Found`.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// `422 Unprocessable Entity` for input that breaks a request constraint.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Human-readable detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl ResponseError for Rejection {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let detail = if self.status.is_server_error() {
            error!(status = %self.status, detail = %self.detail, "request failed");
            INTERNAL_DETAIL
        } else {
            self.detail.as_str()
        };
        HttpResponse::build(self.status).json(RejectionBody { detail })
    }
}

impl From<PageRequestError> for Rejection {
    fn from(err: PageRequestError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

fn reject_unparsable(err: impl std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "request rejected");
    Rejection::unprocessable(err.to_string()).into()
}

/// JSON body extractor answering malformed payloads with 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_unparsable)
}

/// Query-string extractor answering malformed parameters with 422.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(reject_unparsable)
}

/// Path extractor answering malformed segments with 422.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(reject_unparsable)
}
