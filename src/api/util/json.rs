use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::{AppError, AppResult};

/// Wrap a domain result; the error kind is kept so it maps to its own status.
pub fn to_json<T: serde::Serialize>(
    result: AppResult<T>
) -> Result<Json<ApiResponse<T>>, AppError> {
    result.map(|value| Json(ApiResponse::ok(value)))
}
