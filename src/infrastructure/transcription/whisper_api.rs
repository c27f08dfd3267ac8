use super::{TranscriptionEngine, TranscriptionError};
use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use std::path::Path;

/// OpenAI-compatible `/audio/transcriptions` client.
pub struct WhisperApiEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct VerboseTranscription {
    #[serde(default)]
    text: String,
    language: Option<String>,
}

impl WhisperApiEngine {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperApiEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
    ) -> Result<(String, Option<String>), TranscriptionError> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::AudioUnavailable {
                path: audio_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let file_part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/mpeg")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, url = %self.endpoint(), "Sending audio to Whisper API");

        let mut request = self.client.post(self.endpoint()).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: VerboseTranscription = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(chars = parsed.text.len(), "Whisper API transcription completed");

        Ok((parsed.text, parsed.language))
    }
}
