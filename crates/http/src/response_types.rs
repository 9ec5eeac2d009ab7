//! Response types (Serialize)

use serde::Serialize;

use contentrest_core::{CatalogEntry, Page, Preference};

/// `{"list": {"pagination": {...}, "entries": [{"entry": ...}]}}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub list: ListBody<T>,
}

#[derive(Debug, Serialize)]
pub struct ListBody<T> {
    pub pagination: Pagination,
    pub entries: Vec<EntryResponse<T>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub count: usize,
    pub has_more_items: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    pub skip_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse<T> {
    pub entry: T,
}

impl<T> From<Page<T>> for ListResponse<T> {
    fn from(page: Page<T>) -> Self {
        let pagination = Pagination {
            count: page.count(),
            has_more_items: page.has_more_items,
            total_items: page.total_items,
            skip_count: page.skip_count,
            max_items: page.max_items,
        };
        let entries = page.items.into_iter().map(|entry| EntryResponse { entry }).collect();
        Self { list: ListBody { pagination, entries } }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            prefix: entry.prefix().map(ToOwned::to_owned),
            id: entry.id,
            title: entry.title,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceResponse {
    pub id: String,
    pub value: serde_json::Value,
}

impl From<Preference> for PreferenceResponse {
    fn from(preference: Preference) -> Self {
        Self { id: preference.id, value: preference.value }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
