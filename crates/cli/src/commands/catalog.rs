use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use contentrest_http::{CatalogEntryResponse, ListResponse};
use contentrest_service::{CatalogFilter, CatalogService};

use crate::load_seed;

pub(crate) async fn run(
    seed: Option<&Path>,
    skip: Option<usize>,
    max: Option<usize>,
    prefix: Option<&str>,
) -> Result<()> {
    let backends = load_seed(seed)?.into_backends()?;
    let service = CatalogService::new(Arc::new(backends.catalog));

    let request = service.page_request(skip, max)?;
    let filter = CatalogFilter::from_prefix_patterns(prefix)?;
    let page = service.list(&filter, Some(&request)).await?;

    let body: ListResponse<CatalogEntryResponse> = page.map(CatalogEntryResponse::from).into();
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
