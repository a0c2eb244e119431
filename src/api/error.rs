// API error types with JSON response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body mirrored by every failed operation:
/// `{"error": "...", "success": false}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub success: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or empty `text` field. Client error, never retried.
    #[error("Text is required")]
    MissingText,
    /// Unexpected failure inside a pipeline stage, surfaced with its
    /// message rather than swallowed. Every current stage is a total
    /// function, so nothing constructs this yet; it is the mapping point
    /// for any stage that becomes fallible (e.g. an out-of-process
    /// rewriter).
    #[error("{0}")]
    Computation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::Computation(detail) => {
                tracing::error!(detail, "pipeline stage failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_text_returns_400() {
        let response = ApiError::MissingText.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Text is required");
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn computation_returns_500_with_message() {
        let response = ApiError::Computation("stage blew up".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "stage blew up");
        assert_eq!(json["success"], false);
    }
}
