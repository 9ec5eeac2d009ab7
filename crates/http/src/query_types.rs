//! Request/query types (Deserialize)

use serde::Deserialize;

/// `?skipCount=&maxItems=&prefix=` for catalog listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub skip_count: Option<usize>,
    pub max_items: Option<usize>,
    /// Comma-separated namespace prefix globs.
    pub prefix: Option<String>,
}

/// `?skipCount=&maxItems=` for plain paged listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub skip_count: Option<usize>,
    pub max_items: Option<usize>,
}
