use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use pokedex_data::Dataset;
use serde::Serialize;

use crate::error::ApiError;

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub pretty_json: bool,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, pretty_json: bool) -> Self {
        Self {
            dataset,
            pretty_json,
        }
    }

    /// Encode `value` as a JSON response, indented when `pretty_json` is set
    pub(crate) fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<Response, ApiError> {
        let body = if self.pretty_json {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };

        Ok((
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response())
    }
}
