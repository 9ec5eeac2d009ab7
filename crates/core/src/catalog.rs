use serde::{Deserialize, Serialize};

/// Metadata entry exposed by the catalog (a content type, aspect and so on).
///
/// Ids are prefixed names such as `cm:content`; the part before `:` is the
/// namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), description: None }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Namespace prefix, or `None` for an unprefixed id.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.id.split_once(':').map(|(prefix, _)| prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogEntry;

    #[test]
    fn prefix_is_text_before_colon() {
        assert_eq!(CatalogEntry::new("cm:content", "Content").prefix(), Some("cm"));
        assert_eq!(CatalogEntry::new("plain", "Plain").prefix(), None);
    }
}
