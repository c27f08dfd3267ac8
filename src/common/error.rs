use crate::common::response::ApiError;
use crate::infrastructure::transcription::TranscriptionError;
use axum::http::StatusCode;

/// Failures raised by the conversion and transcription services.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("{0}")]
    NotFound(String),
    #[error("Failed to convert video to MP3: {0}")]
    ConversionFailed(String),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ProcessingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProcessingError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProcessingError> for ApiError {
    fn from(e: ProcessingError) -> Self {
        let status = e.status_code();
        ApiError(e.to_string(), status)
    }
}
