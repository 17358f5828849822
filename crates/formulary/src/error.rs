use http::StatusCode;
use scribe_core::HttpError;
use thiserror::Error;

/// Errors from the medication template store
#[derive(Debug, Error)]
pub enum FormularyError {
    /// Caller supplied an empty category or entry
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The catalog file exists but cannot be read as a category map
    #[error("medication catalog is corrupt: {0}")]
    CatalogCorrupt(String),

    /// The catalog could not be written back to disk
    #[error("failed to persist medication catalog: {0}")]
    Persistence(#[source] std::io::Error),
}

impl HttpError for FormularyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::CatalogCorrupt(_) | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidArgument(_) => "invalid_request_error",
            Self::CatalogCorrupt(_) => "catalog_corrupt_error",
            Self::Persistence(_) => "persistence_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Persistence(_) => "failed to persist medication catalog".to_owned(),
            other => other.to_string(),
        }
    }
}

impl axum::response::IntoResponse for FormularyError {
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
