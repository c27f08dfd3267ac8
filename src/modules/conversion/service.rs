use crate::common::error::ProcessingError;
use crate::common::storage::is_video_file_name;
use crate::infrastructure::ffmpeg::{FfmpegError, MP3_PROFILE};
use crate::state::AppState;
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct ConversionService;

impl ConversionService {
    /// Extracts the audio track of the report's video into
    /// `tmp/audio/{report_id}/audio.mp3` and returns that path.
    ///
    /// An explicit `video_path` wins when it exists on disk; otherwise the
    /// video is discovered under `tmp/videos/{report_id}/`.
    pub async fn convert_video_to_mp3(
        state: AppState,
        report_id: &str,
        video_path: Option<&str>,
    ) -> Result<PathBuf, ProcessingError> {
        let output_dir = state.storage.converted_audio_dir(report_id);
        tokio::fs::create_dir_all(&output_dir).await?;
        let output_audio_path = state.storage.converted_audio(report_id);

        let explicit = match video_path {
            Some(path) => tokio::fs::try_exists(path)
                .await
                .unwrap_or(false)
                .then(|| PathBuf::from(path)),
            None => None,
        };
        let input_video_path = match explicit {
            Some(path) => path,
            None => Self::find_video(&state.storage.video_dir(report_id)).await?,
        };

        info!(
            report_id,
            input = %input_video_path.display(),
            output = %output_audio_path.display(),
            "Converting video to MP3"
        );

        let ffmpeg = state.ffmpeg.clone();
        let (input, output) = (input_video_path.clone(), output_audio_path.clone());
        let result =
            tokio::task::spawn_blocking(move || ffmpeg.extract_audio(&input, &output, &MP3_PROFILE))
                .await
                .map_err(|e| anyhow!("conversion worker failed: {}", e))?;

        match result {
            Ok(()) => Ok(output_audio_path),
            Err(FfmpegError::Failed { stderr }) => Err(ProcessingError::ConversionFailed(stderr)),
            Err(e) => {
                error!("Error converting video to MP3: {}", e);
                Err(ProcessingError::ConversionFailed(e.to_string()))
            }
        }
    }

    /// Picks the lexicographically smallest file name with an allowed video
    /// extension, so the choice does not depend on directory listing order.
    async fn find_video(video_dir: &Path) -> Result<PathBuf, ProcessingError> {
        if !tokio::fs::try_exists(video_dir).await.unwrap_or(false) {
            return Err(ProcessingError::NotFound(format!(
                "Video directory not found: {}",
                video_dir.display()
            )));
        }

        let mut entries = tokio::fs::read_dir(video_dir).await?;
        let mut candidates = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_video_file_name(name) {
                    candidates.push(name.to_string());
                }
            }
        }

        candidates
            .into_iter()
            .min()
            .map(|name| video_dir.join(name))
            .ok_or_else(|| {
                ProcessingError::NotFound(format!("No video files found in {}", video_dir.display()))
            })
    }
}
