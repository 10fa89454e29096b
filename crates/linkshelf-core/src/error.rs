use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid input shape: {0}")]
    InputShape(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("fetch failed with status {status}: {source_location}")]
    FetchStatus {
        status: u16,
        source_location: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LinkError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputShape(_) => "INPUT_SHAPE",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::FetchStatus { .. } => "FETCH_STATUS",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Http(_) => "HTTP_ERROR",
        }
    }

    /// Transport-level failures belong to the loader; everything else is a
    /// defect in the loaded data itself.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::FetchStatus { .. } | Self::Io(_) | Self::Http(_) | Self::NotFound(_)
        )
    }

    pub fn to_payload(&self, operation: impl Into<String>, source: Option<String>) -> ErrorPayload {
        let details = match self {
            Self::FetchStatus { status, .. } => Some(serde_json::json!({ "status": status })),
            _ => None,
        };
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            source,
            details,
        }
    }
}
