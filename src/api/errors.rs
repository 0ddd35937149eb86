use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::CrosscheckError;

impl IntoResponse for CrosscheckError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            CrosscheckError::EmptyCorpus
            | CrosscheckError::EmptyVocabulary
            | CrosscheckError::Corpus(_)
            | CrosscheckError::Config(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
