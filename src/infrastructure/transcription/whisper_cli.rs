//! Local whisper.cpp binary.

use super::{TranscriptionEngine, TranscriptionError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub struct WhisperCliEngine {
    binary: String,
    model_path: PathBuf,
    language: Option<String>,
}

impl WhisperCliEngine {
    pub fn new(binary: String, model_path: PathBuf, language: Option<String>) -> Self {
        Self {
            binary,
            model_path,
            language,
        }
    }

    fn args(&self, audio_path: &Path) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            self.model_path.display().to_string(),
            "-f".to_string(),
            audio_path.display().to_string(),
            "-nt".to_string(),
        ];
        if let Some(lang) = &self.language {
            args.push("-l".to_string());
            args.push(lang.clone());
        }
        args
    }

    fn run(binary: &str, args: &[String]) -> Result<String, TranscriptionError> {
        let output = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| TranscriptionError::ProcessFailed(format!("failed to run {}: {}", binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscriptionError::ProcessFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCliEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
    ) -> Result<(String, Option<String>), TranscriptionError> {
        if !audio_path.exists() {
            return Err(TranscriptionError::AudioUnavailable {
                path: audio_path.display().to_string(),
                reason: "file does not exist".to_string(),
            });
        }

        let binary = self.binary.clone();
        let args = self.args(audio_path);

        let text = tokio::task::spawn_blocking(move || Self::run(&binary, &args))
            .await
            .map_err(|e| TranscriptionError::ProcessFailed(format!("worker panicked: {}", e)))??;

        tracing::info!(chars = text.len(), "whisper.cpp transcription completed");

        Ok((text, self.language.clone()))
    }
}
