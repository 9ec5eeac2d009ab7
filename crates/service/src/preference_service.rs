use std::sync::Arc;

use contentrest_core::{Page, PageRequest, Preference, paginate};
use contentrest_storage::traits::PreferenceRepository;

use crate::ServiceError;
use crate::catalog_service::configured_default_max_items;

/// Paged access to a person's preferences.
pub struct PreferenceService {
    repository: Arc<dyn PreferenceRepository>,
    default_max_items: usize,
}

impl PreferenceService {
    #[must_use]
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository, default_max_items: configured_default_max_items() }
    }

    pub fn page_request(
        &self,
        skip_count: Option<usize>,
        max_items: Option<usize>,
    ) -> Result<PageRequest, ServiceError> {
        Ok(PageRequest::from_optional(skip_count, max_items, self.default_max_items)?)
    }

    pub async fn list(
        &self,
        person_id: &str,
        request: Option<&PageRequest>,
    ) -> Result<Page<Preference>, ServiceError> {
        require("person id", person_id)?;
        let prefs = self.repository.list_for(person_id).await?;
        let page = paginate(Some(prefs.as_slice()), request)?;
        tracing::debug!(
            person = person_id,
            total = prefs.len(),
            returned = page.count(),
            "preference listing"
        );
        Ok(page)
    }

    pub async fn get(&self, person_id: &str, preference_id: &str) -> Result<Preference, ServiceError> {
        require("person id", person_id)?;
        require("preference id", preference_id)?;
        self.repository.get(person_id, preference_id).await?.ok_or_else(|| {
            ServiceError::NotFound { entity: "preference", id: preference_id.to_owned() }
        })
    }
}

fn require(what: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(format!("{what} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentrest_storage::InMemoryPreferenceStore;

    async fn service() -> PreferenceService {
        let store = InMemoryPreferenceStore::new();
        for (id, value) in [
            ("org.example.a", "1"),
            ("org.example.b", "2"),
            ("org.example.c", "3"),
        ] {
            store.set("alice", Preference::new(id, value)).await;
        }
        store.add_person("bob").await;
        PreferenceService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn lists_a_page_of_preferences() {
        let svc = service().await;
        let req = PageRequest::new(1, 1).unwrap();
        let page = svc.list("alice", Some(&req)).await.unwrap();
        assert_eq!(page.items, vec![Preference::new("org.example.b", "2")]);
        assert!(page.has_more_items);
        assert_eq!(page.total_items, Some(3));
    }

    #[tokio::test]
    async fn person_without_preferences_gets_empty_page() {
        let svc = service().await;
        let page = svc.list("bob", Some(&PageRequest::default())).await.unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more_items);
        assert_eq!(page.total_items, Some(0));
    }

    #[tokio::test]
    async fn unknown_person_and_preference_are_not_found() {
        let svc = service().await;
        let req = PageRequest::default();
        assert!(svc.list("carol", Some(&req)).await.unwrap_err().is_not_found());
        assert!(svc.get("alice", "org.example.z").await.unwrap_err().is_not_found());
        assert!(svc.get("carol", "org.example.a").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn blank_ids_and_missing_request_are_invalid() {
        let svc = service().await;
        let req = PageRequest::default();
        assert!(matches!(svc.list(" ", Some(&req)).await, Err(ServiceError::InvalidArgument(_))));
        assert!(matches!(svc.list("alice", None).await, Err(ServiceError::InvalidArgument(_))));
        assert!(matches!(svc.get("alice", "").await, Err(ServiceError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn get_returns_the_value() {
        let svc = service().await;
        assert_eq!(svc.get("alice", "org.example.c").await.unwrap().value, "3");
    }
}
