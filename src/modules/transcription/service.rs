use crate::common::error::ProcessingError;
use crate::state::AppState;
use tracing::{error, info};

pub struct TranscriptionService;

impl TranscriptionService {
    pub async fn transcribe_audio_to_text(
        state: AppState,
        report_id: &str,
    ) -> Result<String, ProcessingError> {
        let audio_file_path = state.storage.transcription_input(report_id);

        let (transcription, language) = state
            .transcriber
            .transcribe(&audio_file_path)
            .await
            .map_err(|e| {
                error!("An error occurred: {}", e);
                ProcessingError::from(e)
            })?;

        if transcription.is_empty() {
            return Err(ProcessingError::NotFound(
                "Transcription failed or returned empty.".to_string(),
            ));
        }

        let output_file = state.storage.transcript(report_id);
        if let Some(parent) = output_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&output_file, transcription.as_bytes()).await?;

        info!(
            report_id,
            language = language.as_deref().unwrap_or("unknown"),
            "Transcription saved to '{}'.",
            output_file.display()
        );

        Ok(transcription)
    }
}
