//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use logic_domain::error::LogicError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LogicError`] to an HTTP response with appropriate status code.
pub struct ApiError(LogicError);

impl From<LogicError> for ApiError {
    fn from(err: LogicError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LogicError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LogicError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            LogicError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logic_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let response =
            ApiError::from(LogicError::from(ValidationError::EmptyName)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let response = ApiError::from(LogicError::from(NotFoundError {
            entity: "Restaurant",
            id: "x".to_string(),
        }))
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_storage_error_to_opaque_500() {
        let source = std::io::Error::other("connection lost");
        let response = ApiError::from(LogicError::Storage(Box::new(source))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
