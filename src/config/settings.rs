use crate::config::env::{self, EnvKey};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown transcription provider: {0} (expected `api` or `cli`)")]
    UnknownProvider(String),
    #[error("{0} must be set when TRANSCRIPTION_PROVIDER=cli")]
    MissingModelPath(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscriptionProvider {
    Api,
    Cli,
}

impl FromStr for TranscriptionProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "cli" => Ok(Self::Cli),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WhisperConfig {
    pub provider: TranscriptionProvider,
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub cli_bin: String,
    pub model_path: Option<PathBuf>,
    pub language: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub storage_root: PathBuf,
    pub ffmpeg_bin: String,
    pub whisper: WhisperConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(env::get_opt)
    }

    /// Builds the config from any key source. Unset and blank values both
    /// read as `None` and fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(EnvKey) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: EnvKey| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or = |key: EnvKey, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let provider = get_or(EnvKey::TranscriptionProvider, "api").parse()?;
        let model_path = get(EnvKey::WhisperModelPath).map(PathBuf::from);

        if provider == TranscriptionProvider::Cli && model_path.is_none() {
            return Err(ConfigError::MissingModelPath(EnvKey::WhisperModelPath.as_str()));
        }

        Ok(Self {
            server_port: get(EnvKey::ServerPort)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(8000),
            storage_root: PathBuf::from(get_or(EnvKey::StorageRoot, ".")),
            ffmpeg_bin: get_or(EnvKey::FfmpegBin, "ffmpeg"),
            whisper: WhisperConfig {
                provider,
                api_url: get_or(EnvKey::WhisperApiUrl, "https://api.openai.com/v1"),
                api_key: get(EnvKey::WhisperApiKey),
                model: get_or(EnvKey::WhisperModel, "whisper-1"),
                cli_bin: get_or(EnvKey::WhisperCliBin, "whisper-cli"),
                model_path,
                language: get(EnvKey::WhisperLanguage),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(EnvKey, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<EnvKey, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(&key).cloned())
    }

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!("API".parse::<TranscriptionProvider>().unwrap(), TranscriptionProvider::Api);
        assert_eq!(" cli ".parse::<TranscriptionProvider>().unwrap(), TranscriptionProvider::Cli);
    }

    #[test]
    fn unknown_provider_fails_startup() {
        let err = config_from(&[(EnvKey::TranscriptionProvider, "local")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider(ref p) if p == "local"));
    }

    #[test]
    fn cli_provider_requires_model_path() {
        let err = config_from(&[(EnvKey::TranscriptionProvider, "cli")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingModelPath("WHISPER_MODEL_PATH")));

        let config = config_from(&[
            (EnvKey::TranscriptionProvider, "cli"),
            (EnvKey::WhisperModelPath, "models/ggml-base.bin"),
        ])
        .unwrap();
        assert_eq!(config.whisper.provider, TranscriptionProvider::Cli);
        assert_eq!(config.whisper.model_path, Some(PathBuf::from("models/ggml-base.bin")));
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_port, 8000);
        assert_eq!(config.storage_root, PathBuf::from("."));
        assert_eq!(config.ffmpeg_bin, "ffmpeg");
        assert_eq!(config.whisper.provider, TranscriptionProvider::Api);
        assert_eq!(config.whisper.api_url, "https://api.openai.com/v1");
        assert_eq!(config.whisper.model, "whisper-1");
        assert_eq!(config.whisper.cli_bin, "whisper-cli");
        assert!(config.whisper.api_key.is_none());
        assert!(config.whisper.model_path.is_none());
        assert!(config.whisper.language.is_none());
    }

    #[test]
    fn blank_values_read_as_unset() {
        let config = config_from(&[
            (EnvKey::WhisperApiKey, "   "),
            (EnvKey::WhisperLanguage, ""),
            (EnvKey::FfmpegBin, " "),
            (EnvKey::ServerPort, "not-a-port"),
        ])
        .unwrap();

        assert!(config.whisper.api_key.is_none());
        assert!(config.whisper.language.is_none());
        assert_eq!(config.ffmpeg_bin, "ffmpeg");
        assert_eq!(config.server_port, 8000);
    }
}
