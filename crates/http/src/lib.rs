//! HTTP API server for contentrest.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use contentrest_service::{
    CatalogService, JobTracker, PreferenceService, SizeCalculationExecutor,
};
use contentrest_storage::{InMemoryStatusCache, SeedData, StorageError};

pub use response_types::{
    CatalogEntryResponse, EntryResponse, ListBody, ListResponse, Pagination, PreferenceResponse,
    VersionResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Paged catalog listings
    pub catalog_service: Arc<CatalogService>,
    /// Folder size calculation jobs
    pub size_jobs: Arc<JobTracker>,
    /// Paged person preferences
    pub preference_service: Arc<PreferenceService>,
}

impl AppState {
    /// Wire in-memory backends loaded from `seed`.
    ///
    /// The status cache takes its TTL and capacity from the environment.
    pub fn in_memory(seed: SeedData) -> Result<Self, StorageError> {
        let backends = seed.into_backends()?;
        let nodes = Arc::new(backends.nodes);
        let cache = Arc::new(InMemoryStatusCache::from_env());
        let executor = Arc::new(SizeCalculationExecutor::new(nodes.clone(), cache.clone()));
        Ok(Self {
            catalog_service: Arc::new(CatalogService::new(Arc::new(backends.catalog))),
            size_jobs: Arc::new(JobTracker::folder_size(nodes, cache, executor)),
            preference_service: Arc::new(PreferenceService::new(Arc::new(backends.preferences))),
        })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/catalog", get(handlers::catalog::list_catalog))
        .route("/api/catalog/{id}", get(handlers::catalog::get_catalog_entry))
        .route("/api/nodes/{id}/calculate-size", post(handlers::nodes::calculate_size))
        .route("/api/nodes/{id}/size-details/{job_id}", get(handlers::nodes::get_size_details))
        .route("/api/people/{person_id}/preferences", get(handlers::people::list_preferences))
        .route(
            "/api/people/{person_id}/preferences/{preference_id}",
            get(handlers::people::get_preference),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
