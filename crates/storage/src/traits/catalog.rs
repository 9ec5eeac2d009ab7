use async_trait::async_trait;
use contentrest_core::CatalogEntry;

use crate::error::StorageError;

/// Read access to catalog metadata.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Get entry by prefixed id.
    async fn get_by_id(&self, id: &str) -> Result<Option<CatalogEntry>, StorageError>;

    /// All entries, ordered by id.
    async fn get_all(&self) -> Result<Vec<CatalogEntry>, StorageError>;
}
