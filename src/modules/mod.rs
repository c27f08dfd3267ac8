pub mod conversion;
pub mod transcription;
