use serde::{Deserialize, Serialize};

/// Node categories relevant to subject validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Document,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Folder => "folder",
            Self::Document => "document",
        }
    }
}

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Content size in bytes. Always zero for folders.
    #[serde(default)]
    pub content_size: u64,
}

impl Node {
    #[must_use]
    pub fn folder(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder,
            parent_id: parent_id.map(ToOwned::to_owned),
            content_size: 0,
        }
    }

    #[must_use]
    pub fn document(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<&str>,
        content_size: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Document,
            parent_id: parent_id.map(ToOwned::to_owned),
            content_size,
        }
    }

    #[must_use]
    pub fn subject_ref(&self) -> SubjectRef {
        SubjectRef { id: self.id.clone(), kind: self.kind }
    }
}

/// Resolved reference to a job subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectRef {
    pub id: String,
    pub kind: NodeKind,
}
