use std::collections::BTreeMap;

use async_trait::async_trait;
use contentrest_core::CatalogEntry;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::CatalogRepository;

/// Catalog kept in an id-ordered map.
#[derive(Default)]
pub struct InMemoryCatalog {
    entries: RwLock<BTreeMap<String, CatalogEntry>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries, rejecting repeated ids.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, StorageError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            if map.contains_key(&entry.id) {
                return Err(StorageError::Duplicate(format!("catalog entry {}", entry.id)));
            }
            map.insert(entry.id.clone(), entry);
        }
        Ok(Self { entries: RwLock::new(map) })
    }

    /// Insert or replace an entry.
    pub async fn upsert(&self, entry: CatalogEntry) {
        self.entries.write().await.insert(entry.id.clone(), entry);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn get_by_id(&self, id: &str) -> Result<Option<CatalogEntry>, StorageError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<CatalogEntry>, StorageError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }
}
