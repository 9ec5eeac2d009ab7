//! JSON seed data for the in-memory backends.

use std::collections::HashMap;
use std::path::Path;

use contentrest_core::{CatalogEntry, Node, NodeKind};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::memory::{InMemoryCatalog, InMemoryNodeStore, InMemoryPreferenceStore, PreferenceMap};

/// `{"nodes": [...], "catalog": [...], "preferences": {"person": {"pref.id": value}}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
    #[serde(default)]
    pub preferences: PreferenceMap,
}

/// Backends built from one seed.
pub struct InMemoryBackends {
    pub nodes: InMemoryNodeStore,
    pub catalog: InMemoryCatalog,
    pub preferences: InMemoryPreferenceStore,
}

impl SeedData {
    pub fn from_json_str(raw: &str) -> Result<Self, StorageError> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_path(path: &Path) -> Result<Self, StorageError> {
        let raw = std::fs::read_to_string(path)?;
        let seed = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            nodes = seed.nodes.len(),
            catalog = seed.catalog.len(),
            people = seed.preferences.len(),
            "loaded seed data"
        );
        Ok(seed)
    }

    /// Every parent must exist and be a folder; documents carry no children.
    pub fn validate(&self) -> Result<(), StorageError> {
        let mut kinds: HashMap<&str, NodeKind> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if kinds.insert(node.id.as_str(), node.kind).is_some() {
                return Err(StorageError::Duplicate(format!("node {}", node.id)));
            }
        }
        for node in &self.nodes {
            let Some(parent) = node.parent_id.as_deref() else {
                continue;
            };
            match kinds.get(parent) {
                None => {
                    return Err(StorageError::InvalidSeed(format!(
                        "node {} references missing parent {parent}",
                        node.id
                    )));
                },
                Some(NodeKind::Document) => {
                    return Err(StorageError::InvalidSeed(format!(
                        "node {} has document {parent} as parent",
                        node.id
                    )));
                },
                Some(NodeKind::Folder) => {},
            }
        }
        if let Some(person) = self.preferences.keys().find(|id| id.trim().is_empty()) {
            return Err(StorageError::InvalidSeed(format!("blank person id {person:?} in preferences")));
        }
        Ok(())
    }

    pub fn into_backends(self) -> Result<InMemoryBackends, StorageError> {
        Ok(InMemoryBackends {
            nodes: InMemoryNodeStore::from_nodes(self.nodes)?,
            catalog: InMemoryCatalog::from_entries(self.catalog)?,
            preferences: InMemoryPreferenceStore::from_map(self.preferences),
        })
    }
}
