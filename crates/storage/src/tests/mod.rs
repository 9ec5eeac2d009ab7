//! Test utilities and module declarations for storage tests.

use contentrest_core::{CatalogEntry, Node};

use crate::InMemoryNodeStore;

/// ```text
/// root/
///   a.txt (100)
///   docs/
///     b.txt (20)
///     nested/
///       c.txt (3)
///   empty/
/// ```
pub fn sample_nodes() -> Vec<Node> {
    vec![
        Node::folder("root", "root", None),
        Node::document("a", "a.txt", Some("root"), 100),
        Node::folder("docs", "docs", Some("root")),
        Node::document("b", "b.txt", Some("docs"), 20),
        Node::folder("nested", "nested", Some("docs")),
        Node::document("c", "c.txt", Some("nested"), 3),
        Node::folder("empty", "empty", Some("root")),
    ]
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn sample_store() -> InMemoryNodeStore {
    InMemoryNodeStore::from_nodes(sample_nodes()).unwrap()
}

pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("cm:content", "Content"),
        CatalogEntry::new("cm:folder", "Folder"),
        CatalogEntry::new("app:configurable", "Configurable"),
        CatalogEntry::new("rn:rendition", "Rendition").with_description("Derived content"),
    ]
}
