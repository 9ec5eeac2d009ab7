//! In-process backends.

mod catalog;
mod nodes;
mod preferences;
mod status_cache;

pub use catalog::InMemoryCatalog;
pub use nodes::InMemoryNodeStore;
pub use preferences::{InMemoryPreferenceStore, PreferenceMap};
pub use status_cache::InMemoryStatusCache;
