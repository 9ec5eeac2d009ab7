//! Service layer for contentrest
//!
//! Sits between the HTTP handlers and the storage collaborators.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod catalog_service;
mod error;
mod executor;
mod job_tracker;
mod preference_service;

pub use catalog_service::{CatalogFilter, CatalogService};
pub use error::ServiceError;
pub use executor::{ActionExecutor, SizeCalculationExecutor, calculate_folder_size};
pub use job_tracker::JobTracker;
pub use preference_service::PreferenceService;
