use crate::common::response::ApiError;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use validator::Validate;

/// Unwraps a query extraction and runs its validation rules, turning either
/// failure into a 400 with the usual `{"detail": ...}` body.
pub fn validated<T: Validate>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    let Query(params) = query.map_err(|e| ApiError(e.body_text(), StatusCode::BAD_REQUEST))?;
    params
        .validate()
        .map_err(|e| ApiError(e.to_string(), StatusCode::BAD_REQUEST))?;
    Ok(params)
}
