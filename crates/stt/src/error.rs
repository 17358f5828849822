use http::StatusCode;
use scribe_core::HttpError;
use thiserror::Error;

/// Errors from audio upload handling and the transcription provider
#[derive(Debug, Error)]
pub enum SttError {
    /// Caller input was malformed (bad multipart form, bad upload id)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The referenced upload does not exist or was already consumed
    #[error("upload not found: {0}")]
    UploadNotFound(String),

    /// Reading or writing stored audio failed
    #[error("audio storage error: {0}")]
    Storage(#[source] std::io::Error),

    /// The provider could not be reached
    #[error("failed to reach transcription provider: {0}")]
    Connection(String),

    /// The provider rejected the configured credentials
    #[error("transcription provider rejected the configured API key")]
    AuthenticationFailed,

    /// The provider returned an error response
    #[error("transcription provider returned {status}: {message}")]
    Provider {
        /// Upstream HTTP status
        status: u16,
        /// Upstream error body, surfaced verbatim
        message: String,
    },

    /// The provider response could not be parsed
    #[error("unparseable transcription provider response: {0}")]
    InvalidResponse(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UploadNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Connection(_) | Self::AuthenticationFailed | Self::Provider { .. } | Self::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::UploadNotFound(_) => "not_found_error",
            Self::Storage(_) => "storage_error",
            Self::Connection(_) | Self::AuthenticationFailed | Self::Provider { .. } | Self::InvalidResponse(_) => {
                "transcription_error"
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Storage(_) => "audio storage failed".to_owned(),
            other => other.to_string(),
        }
    }
}

impl axum::response::IntoResponse for SttError {
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
