use super::dto::{ConvertQuery, ConvertResponse};
use super::service::ConversionService;
use crate::common::query::validated;
use crate::common::response::{ApiError, ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

/// Extract the audio track of a report's video as MP3
#[utoipa::path(
    post,
    path = "/convert_to_mp3",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Audio extracted", body = ConvertResponse),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Conversion failed", body = ErrorResponse)
    ),
    tag = "Audio"
)]
pub async fn convert_to_mp3(
    State(state): State<AppState>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match validated(query) {
        Ok(q) => q,
        Err(e) => return e.into_response(),
    };
    let video_path = query.video_path.as_deref().filter(|p| !p.is_empty());

    match ConversionService::convert_video_to_mp3(state, &query.report_id, video_path).await {
        Ok(output_audio_path) => ApiSuccess(
            ConvertResponse {
                message: format!(
                    "Successfully converted video to MP3. File saved at: {}",
                    output_audio_path.display()
                ),
            },
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => {
            error!(report_id = %query.report_id, status = %e.status_code(), "Conversion failed: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
