use async_trait::async_trait;
use contentrest_core::JobRecord;

use crate::error::StorageError;

/// Shared key-value store for job status records.
///
/// Written by the tracker at submission and by the executor on completion,
/// so a `put` must be visible to every later `get`. Expiry is the
/// implementation's business; callers never delete.
#[async_trait]
pub trait StatusCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<JobRecord>, StorageError>;

    /// Insert or overwrite.
    async fn put(&self, key: &str, record: JobRecord) -> Result<(), StorageError>;

    async fn contains(&self, key: &str) -> Result<bool, StorageError>;

    /// Insert only when no live record exists, as one atomic step.
    ///
    /// Returns `None` when `record` was stored, otherwise the record that
    /// was already there.
    async fn put_if_absent(
        &self,
        key: &str,
        record: JobRecord,
    ) -> Result<Option<JobRecord>, StorageError>;

    /// Write `record` unless a live record for a different job holds `key`.
    ///
    /// Writes when the key is empty or expired, or when the stored record
    /// belongs to `job_id`. Returns whether the write happened. Check and
    /// write are one atomic step.
    async fn put_if_owned(
        &self,
        key: &str,
        job_id: &str,
        record: JobRecord,
    ) -> Result<bool, StorageError>;
}
