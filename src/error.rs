//! API error type for the query handlers.
//!
//! Only malformed requests are errors here. Unknown identifiers are not:
//! lookups surface those as empty/absent results with a 200, and the
//! equipment fallback masks them entirely.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or empty required parameter: {0}")]
    MissingParam(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParam(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}
