use crate::common::storage::StorageLayout;
use crate::config::settings::AppConfig;
use crate::infrastructure::ffmpeg::Ffmpeg;
use crate::infrastructure::transcription::TranscriptionEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: StorageLayout,
    pub ffmpeg: Ffmpeg,
    pub transcriber: Arc<dyn TranscriptionEngine>,
}

impl AppState {
    pub fn new(config: &AppConfig, transcriber: Arc<dyn TranscriptionEngine>) -> Self {
        Self {
            storage: StorageLayout::new(config.storage_root.clone()),
            ffmpeg: Ffmpeg::new(config.ffmpeg_bin.clone()),
            transcriber,
        }
    }
}
