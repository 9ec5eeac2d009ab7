use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use contentrest_http::{AppState, create_router};

use crate::load_seed;

pub(crate) async fn run(port: u16, host: String, seed: Option<&Path>) -> Result<()> {
    let state = Arc::new(AppState::in_memory(load_seed(seed)?)?);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
