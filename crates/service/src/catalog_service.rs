use std::sync::Arc;

use contentrest_core::{
    CatalogEntry, DEFAULT_MAX_ITEMS, DEFAULT_MAX_ITEMS_ENV, Page, PageRequest,
    env_parse_with_default, paginate,
};
use contentrest_storage::traits::CatalogRepository;
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ServiceError;

/// Namespace-prefix filter for catalog listings.
///
/// Accepts a comma-separated list of glob patterns matched against the part
/// of the id before `:`. Entries without a prefix never match a filter.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    prefixes: Option<GlobSet>,
}

impl CatalogFilter {
    /// Filter that keeps everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_prefix_patterns(raw: Option<&str>) -> Result<Self, ServiceError> {
        let Some(raw) = raw else {
            return Ok(Self::all());
        };
        let mut builder = GlobSetBuilder::new();
        let mut added = 0usize;
        for pattern in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            builder.add(Glob::new(pattern)?);
            added = added.saturating_add(1);
        }
        if added == 0 {
            return Ok(Self::all());
        }
        Ok(Self { prefixes: Some(builder.build()?) })
    }

    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self.prefixes.as_ref() {
            None => true,
            Some(set) => entry.prefix().is_some_and(|prefix| set.is_match(prefix)),
        }
    }
}

/// Page size for requests without `maxItems`, from `CONTENTREST_DEFAULT_MAX_ITEMS`.
pub(crate) fn configured_default_max_items() -> usize {
    let raw = env_parse_with_default(DEFAULT_MAX_ITEMS_ENV, DEFAULT_MAX_ITEMS);
    if raw == 0 {
        tracing::warn!(
            default = DEFAULT_MAX_ITEMS,
            "{DEFAULT_MAX_ITEMS_ENV} must be positive, using default"
        );
        return DEFAULT_MAX_ITEMS;
    }
    raw
}

pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    default_max_items: usize,
}

impl CatalogService {
    #[must_use]
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository, default_max_items: configured_default_max_items() }
    }

    #[must_use]
    pub const fn default_max_items(&self) -> usize {
        self.default_max_items
    }

    /// Turn optional query values into a request using this service's defaults.
    pub fn page_request(
        &self,
        skip_count: Option<usize>,
        max_items: Option<usize>,
    ) -> Result<PageRequest, ServiceError> {
        Ok(PageRequest::from_optional(skip_count, max_items, self.default_max_items)?)
    }

    pub async fn list(
        &self,
        filter: &CatalogFilter,
        request: Option<&PageRequest>,
    ) -> Result<Page<CatalogEntry>, ServiceError> {
        let entries: Vec<CatalogEntry> =
            self.repository.get_all().await?.into_iter().filter(|e| filter.matches(e)).collect();
        let page = paginate(Some(entries.as_slice()), request)?;
        tracing::debug!(
            matched = entries.len(),
            returned = page.count(),
            has_more = page.has_more_items,
            "catalog listing"
        );
        Ok(page)
    }

    pub async fn get(&self, id: &str) -> Result<CatalogEntry, ServiceError> {
        if id.trim().is_empty() {
            return Err(ServiceError::InvalidArgument("catalog id is required".to_owned()));
        }
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound { entity: "catalog entry", id: id.to_owned() })
    }
}
