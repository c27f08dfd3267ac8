use crate::config::settings::{TranscriptionProvider, WhisperConfig};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub mod whisper_api;
pub mod whisper_cli;

pub use whisper_api::WhisperApiEngine;
pub use whisper_cli::WhisperCliEngine;

/// Speech-to-text backend. Returns the transcript text plus the detected
/// (or configured) language when the backend reports one.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
    ) -> Result<(String, Option<String>), TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("cannot read audio file {path}: {reason}")]
    AudioUnavailable { path: String, reason: String },
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("whisper process failed: {0}")]
    ProcessFailed(String),
}

pub fn create_engine(config: &WhisperConfig) -> Arc<dyn TranscriptionEngine> {
    match config.provider {
        TranscriptionProvider::Api => Arc::new(WhisperApiEngine::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
        )),
        TranscriptionProvider::Cli => Arc::new(WhisperCliEngine::new(
            config.cli_bin.clone(),
            config.model_path.clone().unwrap_or_default(),
            config.language.clone(),
        )),
    }
}
