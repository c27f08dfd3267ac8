pub mod ffmpeg;
pub mod transcription;
