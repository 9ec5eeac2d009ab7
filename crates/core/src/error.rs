use thiserror::Error;

/// Domain failures surfaced directly to the caller.
///
/// All of these are detected before any cache write or executor call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed or missing request input (absent paging, empty id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced subject or job does not exist.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The subject exists but is not of the kind the operation needs.
    #[error("invalid node type: {id} is a {actual}, expected a {expected}")]
    InvalidNodeType { id: String, expected: &'static str, actual: &'static str },

    /// The request is well formed but cannot be honoured (stale job handle).
    #[error("unprocessable: {0}")]
    Unprocessable(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
