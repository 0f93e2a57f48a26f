//! Uniform response envelope.

use railway::{Either, ErrorResult};
use serde::{Deserialize, Serialize};

/// Body wrapper for every example endpoint.
///
/// All three keys are always present: a success carries `error: false`,
/// a null `error_message` and the `result`; a failure carries
/// `error: true`, the first error message and a null `result`.
///
/// # Examples
/// ```
/// use backend::inbound::http::envelope::ApiResponse;
/// use railway::{Either, ErrorResult};
///
/// let failed: ApiResponse<u8> =
///     ApiResponse::from_either(Either::Left(ErrorResult::validation("Nome ja existe")));
/// assert!(failed.error);
/// assert_eq!(failed.error_message.as_deref(), Some("Nome ja existe"));
/// assert!(failed.result.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub error: bool,
    pub error_message: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope.
    pub const fn success(result: T) -> Self {
        Self {
            error: false,
            error_message: None,
            result: Some(result),
        }
    }

    /// Failed envelope.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            error: true,
            error_message: Some(message.into()),
            result: None,
        }
    }

    /// Fold a service outcome; failures report their first message.
    pub fn from_either(outcome: Either<ErrorResult, T>) -> Self {
        outcome.fold(|error| Self::fail(error.first_message()), Self::success)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn success_serialises_every_key() {
        let body = serde_json::to_value(ApiResponse::success(7)).expect("serialise");
        assert_eq!(body, json!({"error": false, "error_message": null, "result": 7}));
    }

    #[rstest]
    fn failure_reports_the_first_message() {
        let outcome: Either<ErrorResult, u8> =
            Either::Left(ErrorResult::validation_list(["first", "second"]));
        let body = serde_json::to_value(ApiResponse::from_either(outcome)).expect("serialise");
        assert_eq!(
            body,
            json!({"error": true, "error_message": "first", "result": null})
        );
    }

    #[rstest]
    fn unit_results_serialise_as_null() {
        let body = serde_json::to_value(ApiResponse::success(())).expect("serialise");
        assert_eq!(body["error"], json!(false));
        assert_eq!(body["result"], json!(null));
    }
}
