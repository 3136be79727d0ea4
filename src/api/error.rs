use crate::domain::error::DomainError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// HTTP-facing wrapper so handlers can `?` domain errors.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

/// Undecodable bodies (bad JSON, missing fields, unparseable dates) are
/// invalid input like any other validation failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DomainError::InvalidInput(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            // Duplicate names are reported as a plain bad request.
            DomainError::Conflict(_) => (StatusCode::BAD_REQUEST, "CONFLICT"),
            DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            DomainError::Busy(_) => (StatusCode::CONFLICT, "REFRESH_IN_PROGRESS"),
            DomainError::Database(_) | DomainError::Acquisition(_) | DomainError::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = ErrorResponse {
            error: error.to_string(),
            message: self.0.to_string(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        (status, Json(body)).into_response()
    }
}
