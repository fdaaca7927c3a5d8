//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use energyhub_domain::error::EnergyHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request and [`EnergyHubError`] failures to HTTP responses.
pub enum ApiError {
    /// A path parameter was not a valid device id.
    InvalidId(String),
    /// An error returned by an application service.
    Service(EnergyHubError),
}

impl From<EnergyHubError> for ApiError {
    fn from(err: EnergyHubError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("invalid device id: {raw}"),
            ),
            Self::Service(EnergyHubError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Service(EnergyHubError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Service(
                err @ (EnergyHubError::Storage(_) | EnergyHubError::Notification(_)),
            ) => {
                tracing::error!(error = ?err, "collaborator failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
