use async_trait::async_trait;
use contentrest_core::{Node, NodeKind, SubjectRef};

use crate::error::StorageError;

/// Resolves job subjects and checks their kind.
#[async_trait]
pub trait SubjectResolver: Send + Sync {
    /// Fails with `StorageError::NotFound` for unknown ids.
    async fn resolve(&self, id: &str) -> Result<SubjectRef, StorageError>;

    fn is_of_expected_kind(&self, subject: &SubjectRef, expected: NodeKind) -> bool {
        subject.kind == expected
    }
}

/// Node tree access needed by the size executor.
#[async_trait]
pub trait NodeStore: SubjectResolver {
    async fn get_node(&self, id: &str) -> Result<Option<Node>, StorageError>;

    /// Direct children of `id`, ordered by name.
    async fn children(&self, id: &str) -> Result<Vec<Node>, StorageError>;
}
