use std::collections::HashMap;

use async_trait::async_trait;
use contentrest_core::{Node, SubjectRef};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{NodeStore, SubjectResolver};

/// Node tree held in memory.
#[derive(Default)]
pub struct InMemoryNodeStore {
    nodes: RwLock<HashMap<String, Node>>,
}

impl InMemoryNodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from nodes, rejecting repeated ids.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Result<Self, StorageError> {
        let mut map = HashMap::new();
        for node in nodes {
            if map.contains_key(&node.id) {
                return Err(StorageError::Duplicate(format!("node {}", node.id)));
            }
            map.insert(node.id.clone(), node);
        }
        Ok(Self { nodes: RwLock::new(map) })
    }

    /// Insert or replace a node.
    pub async fn upsert(&self, node: Node) {
        self.nodes.write().await.insert(node.id.clone(), node);
    }

    pub async fn len(&self) -> usize {
        self.nodes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.nodes.read().await.is_empty()
    }
}

#[async_trait]
impl SubjectResolver for InMemoryNodeStore {
    async fn resolve(&self, id: &str) -> Result<SubjectRef, StorageError> {
        self.nodes
            .read()
            .await
            .get(id)
            .map(Node::subject_ref)
            .ok_or_else(|| StorageError::NotFound { entity: "node", id: id.to_owned() })
    }
}

#[async_trait]
impl NodeStore for InMemoryNodeStore {
    async fn get_node(&self, id: &str) -> Result<Option<Node>, StorageError> {
        Ok(self.nodes.read().await.get(id).cloned())
    }

    async fn children(&self, id: &str) -> Result<Vec<Node>, StorageError> {
        let nodes = self.nodes.read().await;
        let mut children: Vec<Node> =
            nodes.values().filter(|n| n.parent_id.as_deref() == Some(id)).cloned().collect();
        children.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(children)
    }
}
