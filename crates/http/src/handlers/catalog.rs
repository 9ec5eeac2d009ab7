use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use contentrest_service::CatalogFilter;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::CatalogQuery;
use crate::response_types::{CatalogEntryResponse, EntryResponse, ListResponse};

pub async fn list_catalog(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ListResponse<CatalogEntryResponse>>, ApiError> {
    let request = state.catalog_service.page_request(query.skip_count, query.max_items)?;
    let filter = CatalogFilter::from_prefix_patterns(query.prefix.as_deref())?;
    let page = state.catalog_service.list(&filter, Some(&request)).await?;
    Ok(Json(page.map(CatalogEntryResponse::from).into()))
}

pub async fn get_catalog_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EntryResponse<CatalogEntryResponse>>, ApiError> {
    let entry = state.catalog_service.get(&id).await?;
    Ok(Json(EntryResponse { entry: entry.into() }))
}
