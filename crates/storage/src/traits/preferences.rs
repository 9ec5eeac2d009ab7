use async_trait::async_trait;
use contentrest_core::Preference;

use crate::error::StorageError;

/// Read access to per-person preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Every preference of `person_id`, ordered by preference id.
    ///
    /// Fails with `StorageError::NotFound` for an unknown person. A known
    /// person without preferences yields an empty list.
    async fn list_for(&self, person_id: &str) -> Result<Vec<Preference>, StorageError>;

    /// `None` when the person exists but has no such preference.
    async fn get(
        &self,
        person_id: &str,
        preference_id: &str,
    ) -> Result<Option<Preference>, StorageError>;
}
