//! Out-of-band execution of long-running actions.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use contentrest_core::{ActionKind, JobRecord, NodeKind, SizeDetails, SubjectRef};
use contentrest_storage::StorageError;
use contentrest_storage::traits::{NodeStore, StatusCache};

use crate::ServiceError;

/// Runs actions away from the request path.
///
/// Implementations must eventually write a terminal record (completed or
/// failed) into the status cache under the subject id, and must not
/// overwrite a record that a later job has taken over.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Mint the job id for a new action.
    fn create_handle(&self, kind: ActionKind) -> String;

    /// Schedule the action and return without waiting for it.
    async fn execute_async(&self, handle: &str, subject: SubjectRef) -> Result<(), ServiceError>;
}

/// Computes folder sizes on spawned tokio tasks.
pub struct SizeCalculationExecutor {
    nodes: Arc<dyn NodeStore>,
    cache: Arc<dyn StatusCache>,
}

impl SizeCalculationExecutor {
    #[must_use]
    pub fn new(nodes: Arc<dyn NodeStore>, cache: Arc<dyn StatusCache>) -> Self {
        Self { nodes, cache }
    }
}

#[async_trait]
impl ActionExecutor for SizeCalculationExecutor {
    fn create_handle(&self, kind: ActionKind) -> String {
        let job_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(kind = kind.as_str(), job_id = %job_id, "created action handle");
        job_id
    }

    async fn execute_async(&self, handle: &str, subject: SubjectRef) -> Result<(), ServiceError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| ServiceError::Executor(format!("no async runtime: {e}")))?;
        let nodes = Arc::clone(&self.nodes);
        let cache = Arc::clone(&self.cache);
        let job_id = handle.to_owned();

        runtime.spawn(async move {
            let record = match calculate_folder_size(nodes.as_ref(), &subject.id).await {
                Ok(details) => {
                    tracing::info!(
                        subject = %subject.id,
                        job_id = %job_id,
                        size_in_bytes = details.size_in_bytes,
                        number_of_files = details.number_of_files,
                        "folder size calculated"
                    );
                    JobRecord::completed(subject.id.as_str(), job_id.as_str(), details)
                },
                Err(e) => {
                    tracing::warn!(subject = %subject.id, job_id = %job_id, "folder size failed: {e}");
                    JobRecord::failed(subject.id.as_str(), job_id.as_str(), e.to_string())
                },
            };
            match cache.put_if_owned(&subject.id, &job_id, record).await {
                Ok(true) => {},
                Ok(false) => tracing::warn!(
                    subject = %subject.id,
                    job_id = %job_id,
                    "a newer job owns the status record, dropping result"
                ),
                Err(e) => tracing::error!(
                    subject = %subject.id,
                    job_id = %job_id,
                    "failed to store job result: {e}"
                ),
            }
        });
        Ok(())
    }
}

/// Total content size and document count below `folder_id`, recursively.
///
/// Nodes reachable twice (a cycle introduced by re-parenting) are counted once.
pub async fn calculate_folder_size(
    nodes: &dyn NodeStore,
    folder_id: &str,
) -> Result<SizeDetails, StorageError> {
    if nodes.get_node(folder_id).await?.is_none() {
        return Err(StorageError::NotFound { entity: "node", id: folder_id.to_owned() });
    }

    let mut size_in_bytes = 0u64;
    let mut number_of_files = 0u64;
    let mut visited: HashSet<String> = HashSet::from([folder_id.to_owned()]);
    let mut pending = vec![folder_id.to_owned()];

    while let Some(current) = pending.pop() {
        for child in nodes.children(&current).await? {
            if !visited.insert(child.id.clone()) {
                continue;
            }
            match child.kind {
                NodeKind::Document => {
                    size_in_bytes = size_in_bytes.saturating_add(child.content_size);
                    number_of_files = number_of_files.saturating_add(1);
                },
                NodeKind::Folder => pending.push(child.id),
            }
        }
    }

    Ok(SizeDetails { size_in_bytes, number_of_files, calculated_at: Utc::now() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentrest_core::Node;
    use contentrest_storage::InMemoryNodeStore;

    fn store() -> InMemoryNodeStore {
        InMemoryNodeStore::from_nodes(vec![
            Node::folder("root", "root", None),
            Node::document("a", "a.txt", Some("root"), 100),
            Node::folder("docs", "docs", Some("root")),
            Node::document("b", "b.txt", Some("docs"), 20),
            Node::folder("nested", "nested", Some("docs")),
            Node::document("c", "c.txt", Some("nested"), 3),
            Node::folder("empty", "empty", Some("root")),
        ])
        .expect("store")
    }

    #[tokio::test]
    async fn sums_nested_documents() {
        let details = calculate_folder_size(&store(), "root").await.unwrap();
        assert_eq!(details.size_in_bytes, 123);
        assert_eq!(details.number_of_files, 3);

        let details = calculate_folder_size(&store(), "docs").await.unwrap();
        assert_eq!(details.size_in_bytes, 23);
        assert_eq!(details.number_of_files, 2);
    }

    #[tokio::test]
    async fn empty_folder_is_zero() {
        let details = calculate_folder_size(&store(), "empty").await.unwrap();
        assert_eq!(details.size_in_bytes, 0);
        assert_eq!(details.number_of_files, 0);
    }

    #[tokio::test]
    async fn unknown_folder_is_not_found() {
        let err = calculate_folder_size(&store(), "ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn cycles_terminate() {
        let store = store();
        store.upsert(Node::folder("root", "root", Some("nested"))).await;
        let details = calculate_folder_size(&store, "docs").await.unwrap();
        assert_eq!(details.size_in_bytes, 123);
        assert_eq!(details.number_of_files, 3);
    }

    #[test]
    fn handles_are_unique() {
        let nodes: Arc<dyn NodeStore> = Arc::new(store());
        let cache: Arc<dyn StatusCache> =
            Arc::new(contentrest_storage::InMemoryStatusCache::default());
        let executor = SizeCalculationExecutor::new(nodes, cache);
        let a = executor.create_handle(ActionKind::FolderSize);
        let b = executor.create_handle(ActionKind::FolderSize);
        assert_ne!(a, b);
    }
}
