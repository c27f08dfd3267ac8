use super::dto::{TranscribeQuery, TranscribeResponse};
use super::service::TranscriptionService;
use crate::common::query::validated;
use crate::common::response::{ApiError, ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

/// Transcribe `res/audio/{report_id}_audio.mp3` and store the text
#[utoipa::path(
    post,
    path = "/transcribe",
    params(TranscribeQuery),
    responses(
        (status = 200, description = "Transcript text", body = TranscribeResponse),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Empty transcription", body = ErrorResponse),
        (status = 500, description = "Transcription failed", body = ErrorResponse)
    ),
    tag = "Audio"
)]
pub async fn transcribe(
    State(state): State<AppState>,
    query: Result<Query<TranscribeQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match validated(query) {
        Ok(q) => q,
        Err(e) => return e.into_response(),
    };

    match TranscriptionService::transcribe_audio_to_text(state, &query.report_id).await {
        Ok(transcription) => {
            ApiSuccess(TranscribeResponse { transcription }, StatusCode::OK).into_response()
        }
        Err(e) => {
            error!(report_id = %query.report_id, status = %e.status_code(), "Transcription failed: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
