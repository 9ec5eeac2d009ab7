use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::PageQuery;
use crate::response_types::{EntryResponse, ListResponse, PreferenceResponse};

pub async fn list_preferences(
    State(state): State<Arc<AppState>>,
    Path(person_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListResponse<PreferenceResponse>>, ApiError> {
    let request = state.preference_service.page_request(query.skip_count, query.max_items)?;
    let page = state.preference_service.list(&person_id, Some(&request)).await?;
    Ok(Json(page.map(PreferenceResponse::from).into()))
}

pub async fn get_preference(
    State(state): State<Arc<AppState>>,
    Path((person_id, preference_id)): Path<(String, String)>,
) -> Result<Json<EntryResponse<PreferenceResponse>>, ApiError> {
    let preference = state.preference_service.get(&person_id, &preference_id).await?;
    Ok(Json(EntryResponse { entry: preference.into() }))
}
