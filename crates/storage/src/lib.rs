//! Storage layer for contentrest
//!
//! Collaborator traits consumed by the service layer, plus in-memory
//! implementations used by the server and the tests.

mod error;
mod memory;
mod seed;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use memory::{
    InMemoryCatalog, InMemoryNodeStore, InMemoryPreferenceStore, InMemoryStatusCache, PreferenceMap,
};
pub use seed::{InMemoryBackends, SeedData};
