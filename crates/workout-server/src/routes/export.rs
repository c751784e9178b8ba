use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::IntoResponse;

use workout_core::export::export_file_name;

use crate::error::ApiError;
use crate::state::AppState;

/// The stored week verbatim, as a download. Weeks never requested through
/// `GET /api/week/{n}` are not found here.
pub async fn export_week(
    State(state): State<AppState>,
    week_number: Result<Path<u32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(week_number) = week_number?;
    let week = state.store.export_week(week_number).await?;
    let disposition = format!("attachment; filename=\"{}\"", export_file_name(&week));
    let disposition =
        HeaderValue::from_str(&disposition).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(week)))
}
