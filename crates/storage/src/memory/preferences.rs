use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use contentrest_core::Preference;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::PreferenceRepository;

/// Person id to preference id to value.
pub type PreferenceMap = BTreeMap<String, BTreeMap<String, Value>>;

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    people: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_map(people: PreferenceMap) -> Self {
        Self { people: RwLock::new(people.into_iter().collect()) }
    }

    /// Register a person with no preferences. Existing preferences are kept.
    pub async fn add_person(&self, person_id: &str) {
        self.people.write().await.entry(person_id.to_owned()).or_default();
    }

    /// Set one preference, registering the person if needed.
    pub async fn set(&self, person_id: &str, preference: Preference) {
        self.people
            .write()
            .await
            .entry(person_id.to_owned())
            .or_default()
            .insert(preference.id, preference.value);
    }

    fn unknown_person(person_id: &str) -> StorageError {
        StorageError::NotFound { entity: "person", id: person_id.to_owned() }
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceStore {
    async fn list_for(&self, person_id: &str) -> Result<Vec<Preference>, StorageError> {
        let people = self.people.read().await;
        let prefs = people.get(person_id).ok_or_else(|| Self::unknown_person(person_id))?;
        Ok(prefs.iter().map(|(id, value)| Preference::new(id.as_str(), value.clone())).collect())
    }

    async fn get(
        &self,
        person_id: &str,
        preference_id: &str,
    ) -> Result<Option<Preference>, StorageError> {
        let people = self.people.read().await;
        let prefs = people.get(person_id).ok_or_else(|| Self::unknown_person(person_id))?;
        Ok(prefs.get(preference_id).map(|value| Preference::new(preference_id, value.clone())))
    }
}
