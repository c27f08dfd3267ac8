use crate::config::settings::{AppConfig, TranscriptionProvider, WhisperConfig};
use crate::infrastructure::transcription::{TranscriptionEngine, TranscriptionError};
use crate::state::AppState;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub fn test_config(root: &Path, ffmpeg_bin: &str) -> AppConfig {
    AppConfig {
        server_port: 0,
        storage_root: root.to_path_buf(),
        ffmpeg_bin: ffmpeg_bin.to_string(),
        whisper: WhisperConfig {
            provider: TranscriptionProvider::Api,
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: None,
            model: "whisper-1".to_string(),
            cli_bin: "whisper-cli".to_string(),
            model_path: None,
            language: None,
        },
    }
}

pub fn test_state(root: &Path, ffmpeg_bin: &str, engine: StubEngine) -> AppState {
    AppState::new(&test_config(root, ffmpeg_bin), Arc::new(engine))
}

/// Stand-in for ffmpeg: copies the input to the last argument, or fails with
/// an ffmpeg-like diagnostic when the input file contains `FAIL`.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-ffmpeg.sh");
    std::fs::write(
        &script,
        r#"#!/bin/sh
in="$2"
for out in "$@"; do :; done
if [ "$(cat "$in")" = "FAIL" ]; then
  echo "$in: Invalid data found when processing input" >&2
  exit 1
fi
cp "$in" "$out"
"#,
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script.display().to_string()
}

pub struct StubEngine {
    result: Result<String, String>,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl StubEngine {
    pub fn text(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for StubEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
    ) -> Result<(String, Option<String>), TranscriptionError> {
        self.calls.lock().unwrap().push(audio_path.to_path_buf());
        match &self.result {
            Ok(text) => Ok((text.clone(), Some("en".to_string()))),
            Err(reason) => Err(TranscriptionError::ApiRequestFailed(reason.clone())),
        }
    }
}
