//! Collaborator traits
//!
//! The service layer only sees these; backends live behind them.

pub mod cache;
pub mod catalog;
pub mod nodes;
pub mod preferences;

pub use cache::StatusCache;
pub use catalog::CatalogRepository;
pub use nodes::{NodeStore, SubjectResolver};
pub use preferences::PreferenceRepository;
