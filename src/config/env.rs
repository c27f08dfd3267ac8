use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvKey {
    ServerPort,
    StorageRoot,
    FfmpegBin,
    TranscriptionProvider,
    WhisperApiUrl,
    WhisperApiKey,
    WhisperModel,
    WhisperCliBin,
    WhisperModelPath,
    WhisperLanguage,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::StorageRoot => "STORAGE_ROOT",
            EnvKey::FfmpegBin => "FFMPEG_BIN",
            EnvKey::TranscriptionProvider => "TRANSCRIPTION_PROVIDER",
            EnvKey::WhisperApiUrl => "WHISPER_API_URL",
            EnvKey::WhisperApiKey => "WHISPER_API_KEY",
            EnvKey::WhisperModel => "WHISPER_MODEL",
            EnvKey::WhisperCliBin => "WHISPER_CLI_BIN",
            EnvKey::WhisperModelPath => "WHISPER_MODEL_PATH",
            EnvKey::WhisperLanguage => "WHISPER_LANGUAGE",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_opt(key: EnvKey) -> Option<String> {
    get(key).ok()
}
