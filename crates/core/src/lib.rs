//! Core types for contentrest
//!
//! This crate contains domain types shared across all other crates.

mod catalog;
mod constants;
mod env_config;
mod error;
mod job;
mod node;
mod paging;
mod preference;

pub use catalog::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use job::*;
pub use node::*;
pub use paging::*;
pub use preference::*;
