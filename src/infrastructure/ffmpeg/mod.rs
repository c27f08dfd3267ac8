use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, error};

/// Fixed audio profile: drop video, 44.1 kHz, stereo, 192 kbit/s, MP3 container.
pub struct EncodingProfile {
    pub sample_rate: &'static str,
    pub channels: &'static str,
    pub bitrate: &'static str,
    pub format: &'static str,
}

pub const MP3_PROFILE: EncodingProfile = EncodingProfile {
    sample_rate: "44100",
    channels: "2",
    bitrate: "192k",
    format: "mp3",
};

#[derive(Debug, thiserror::Error)]
pub enum FfmpegError {
    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{stderr}")]
    Failed { stderr: String },
}

#[derive(Clone, Debug)]
pub struct Ffmpeg {
    bin: String,
}

impl Ffmpeg {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    pub fn args(input: &Path, output: &Path, profile: &EncodingProfile) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.display().to_string(),
            "-vn".to_string(),
            "-ar".to_string(),
            profile.sample_rate.to_string(),
            "-ac".to_string(),
            profile.channels.to_string(),
            "-ab".to_string(),
            profile.bitrate.to_string(),
            "-f".to_string(),
            profile.format.to_string(),
            "-y".to_string(), // overwrite
            output.display().to_string(),
        ]
    }

    /// Blocks until ffmpeg exits. Call from a blocking worker.
    pub fn extract_audio(
        &self,
        input: &Path,
        output: &Path,
        profile: &EncodingProfile,
    ) -> Result<(), FfmpegError> {
        let args = Self::args(input, output, profile);
        debug!(bin = %self.bin, ?args, "Running ffmpeg");

        let result = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| FfmpegError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
            error!("FFMPEG error: {}", stderr);
            return Err(FfmpegError::Failed { stderr });
        }

        Ok(())
    }
}
