use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use contentrest_core::{
    DEFAULT_STATUS_CACHE_CAPACITY, DEFAULT_STATUS_CACHE_TTL_SECS, JobRecord,
    STATUS_CACHE_CAPACITY_ENV, STATUS_CACHE_TTL_ENV, env_parse_with_default,
};
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::error::StorageError;
use crate::traits::StatusCache;

struct Slot {
    record: JobRecord,
    written_at: Instant,
}

/// Status cache held in process memory.
///
/// Entries expire `ttl` after their last write. When `capacity` live
/// entries exist, inserting a new key evicts a finished record first and
/// only falls back to the oldest in-progress one when none is finished.
pub struct InMemoryStatusCache {
    slots: RwLock<HashMap<String, Slot>>,
    ttl: Duration,
    capacity: usize,
}

impl InMemoryStatusCache {
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self { slots: RwLock::new(HashMap::new()), ttl, capacity: capacity.max(1) }
    }

    /// Reads TTL and capacity from `CONTENTREST_STATUS_CACHE_*`.
    #[must_use]
    pub fn from_env() -> Self {
        let ttl_secs = env_parse_with_default(STATUS_CACHE_TTL_ENV, DEFAULT_STATUS_CACHE_TTL_SECS);
        let capacity = env_parse_with_default(STATUS_CACHE_CAPACITY_ENV, DEFAULT_STATUS_CACHE_CAPACITY);
        tracing::debug!(ttl_secs, capacity, "status cache configured");
        Self::new(Duration::from_secs(ttl_secs), capacity)
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let slots = self.slots.read().await;
        slots.values().filter(|slot| self.is_live(slot)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn is_live(&self, slot: &Slot) -> bool {
        slot.written_at.elapsed() < self.ttl
    }

    /// Drop expired entries, then make room for one new key if needed.
    fn make_room(&self, slots: &mut HashMap<String, Slot>, key: &str) {
        slots.retain(|_, slot| slot.written_at.elapsed() < self.ttl);
        if slots.contains_key(key) || slots.len() < self.capacity {
            return;
        }
        // Evicting a running job's record would let a second submit start it again.
        let victim = slots
            .iter()
            .min_by_key(|(_, slot)| (!slot.record.status.is_terminal(), slot.written_at))
            .map(|(k, slot)| (k.clone(), slot.record.status));
        if let Some((victim, status)) = victim {
            tracing::debug!(key = %victim, status = %status, "status cache full, evicting entry");
            slots.remove(&victim);
        }
    }
}

impl Default for InMemoryStatusCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_STATUS_CACHE_TTL_SECS), DEFAULT_STATUS_CACHE_CAPACITY)
    }
}

#[async_trait]
impl StatusCache for InMemoryStatusCache {
    async fn get(&self, key: &str) -> Result<Option<JobRecord>, StorageError> {
        let slots = self.slots.read().await;
        Ok(slots.get(key).filter(|slot| self.is_live(slot)).map(|slot| slot.record.clone()))
    }

    async fn put(&self, key: &str, record: JobRecord) -> Result<(), StorageError> {
        let mut slots = self.slots.write().await;
        self.make_room(&mut slots, key);
        slots.insert(key.to_owned(), Slot { record, written_at: Instant::now() });
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, StorageError> {
        let slots = self.slots.read().await;
        Ok(slots.get(key).is_some_and(|slot| self.is_live(slot)))
    }

    async fn put_if_absent(
        &self,
        key: &str,
        record: JobRecord,
    ) -> Result<Option<JobRecord>, StorageError> {
        let mut slots = self.slots.write().await;
        if let Some(existing) = slots.get(key).filter(|slot| self.is_live(slot)) {
            return Ok(Some(existing.record.clone()));
        }
        self.make_room(&mut slots, key);
        slots.insert(key.to_owned(), Slot { record, written_at: Instant::now() });
        Ok(None)
    }

    async fn put_if_owned(
        &self,
        key: &str,
        job_id: &str,
        record: JobRecord,
    ) -> Result<bool, StorageError> {
        let mut slots = self.slots.write().await;
        if let Some(current) = slots.get(key).filter(|slot| self.is_live(slot))
            && !current.record.belongs_to(job_id)
        {
            return Ok(false);
        }
        self.make_room(&mut slots, key);
        slots.insert(key.to_owned(), Slot { record, written_at: Instant::now() });
        Ok(true)
    }
}
