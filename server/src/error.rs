use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pokedex_query::QueryError;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, mapped to a response in one place.
///
/// Absent records and missing parameters answer with an empty body. Misuse
/// of the `/get` extremum endpoint answers with the plain text `Error`.
/// Query failures answer with a JSON `{"error": ...}` object.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid extremum request: {0}")]
    InvalidExtremum(String),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingParameter(_) | ApiError::InvalidExtremum(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(QueryError::UnknownCategory(_)) => StatusCode::NOT_FOUND,
            ApiError::Query(QueryError::UnknownFunction(_)) => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        match &self {
            ApiError::NotFound | ApiError::MissingParameter(_) => status.into_response(),
            ApiError::InvalidExtremum(_) => (status, "Error").into_response(),
            ApiError::Query(_) | ApiError::Encode(_) => {
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
        }
    }
}
