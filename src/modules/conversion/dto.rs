use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Report the video belongs to
    #[validate(length(min = 1, message = "report_id is required"))]
    pub report_id: String,
    /// Explicit video file; ignored when it does not exist
    pub video_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    pub message: String,
}
