//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use reservas_domain::error::{ReservasError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`ReservasError`] to an HTTP response with appropriate status code.
pub struct ApiError(ReservasError);

impl From<ReservasError> for ApiError {
    fn from(err: ReservasError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ReservasError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ReservasError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ReservasError::StorageUnavailable(err) | ReservasError::CorruptData(err) => {
                tracing::error!(error = %self.0, cause = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback for unknown routes.
pub(crate) async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "route not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservas_domain::error::NotFoundError;
    use reservas_domain::id::ReservationId;

    #[test]
    fn should_map_not_found_to_404() {
        let err = ReservasError::from(NotFoundError::Reservation(ReservationId::from("1")));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_to_400() {
        let response =
            ApiError::from(ValidationError::InvalidDate("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_storage_failures_to_500() {
        let unavailable =
            ReservasError::StorageUnavailable(std::io::Error::other("disk gone").into());
        let corrupt = ReservasError::CorruptData(std::io::Error::other("bad json").into());

        assert_eq!(
            ApiError::from(unavailable).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(corrupt).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
