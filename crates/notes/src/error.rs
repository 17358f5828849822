use http::StatusCode;
use scribe_core::HttpError;
use thiserror::Error;

/// Errors from SOAP note generation
#[derive(Debug, Error)]
pub enum NotesError {
    /// Client sent a malformed or empty request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The generation provider failed or returned an unusable completion
    #[error("note generation failed: {0}")]
    Upstream(String),
}

impl HttpError for NotesError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream(_) => "generation_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl axum::response::IntoResponse for NotesError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": {
                "message": self.client_message(),
                "type": self.error_type(),
                "code": serde_json::Value::Null,
            }
        });

        (self.status_code(), axum::Json(body)).into_response()
    }
}
