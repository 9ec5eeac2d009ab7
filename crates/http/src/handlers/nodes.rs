use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use contentrest_core::{JobHandle, JobStatusView};

use crate::AppState;
use crate::api_error::ApiError;

/// Start (or rejoin) a folder size calculation. Answers 202 straight away.
pub async fn calculate_size(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<JobHandle>), ApiError> {
    let handle = state.size_jobs.submit(&id).await?;
    Ok((StatusCode::ACCEPTED, Json(handle)))
}

pub async fn get_size_details(
    State(state): State<Arc<AppState>>,
    Path((id, job_id)): Path<(String, String)>,
) -> Result<Json<JobStatusView>, ApiError> {
    let view = state.size_jobs.get_status(&id, &job_id).await?;
    Ok(Json(view))
}
