use std::path::{Path, PathBuf};

pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".mov", ".avi", ".mkv"];

/// On-disk layout keyed by report id. All paths are relative to `root`;
/// a root of `.` yields the bare relative paths.
#[derive(Clone, Debug)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, relative: String) -> PathBuf {
        if self.root.as_os_str().is_empty() || self.root == Path::new(".") {
            PathBuf::from(relative)
        } else {
            self.root.join(relative)
        }
    }

    pub fn video_dir(&self, report_id: &str) -> PathBuf {
        self.resolve(format!("tmp/videos/{}", report_id))
    }

    pub fn converted_audio_dir(&self, report_id: &str) -> PathBuf {
        self.resolve(format!("tmp/audio/{}", report_id))
    }

    pub fn converted_audio(&self, report_id: &str) -> PathBuf {
        self.converted_audio_dir(report_id).join("audio.mp3")
    }

    /// Input of the transcribe step. Not the conversion output.
    pub fn transcription_input(&self, report_id: &str) -> PathBuf {
        self.resolve(format!("res/audio/{}_audio.mp3", report_id))
    }

    pub fn transcript(&self, report_id: &str) -> PathBuf {
        self.resolve(format!("res/transcription/{}_transcription.txt", report_id))
    }
}

pub fn is_video_file_name(name: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
