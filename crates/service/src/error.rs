//! Typed error enum for the service layer.
//!
//! Folds domain and storage failures into one closed set of kinds so the
//! HTTP layer can map them to statuses in a single match.

use contentrest_core::CoreError;
use contentrest_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Subject exists but has the wrong kind for the operation.
    #[error("invalid node type: {id} is a {actual}, expected a {expected}")]
    InvalidNodeType { id: String, expected: &'static str, actual: &'static str },

    /// Well-formed request that refers to a stale or foreign job.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// The executor could not schedule the work.
    #[error("executor: {0}")]
    Executor(String),

    /// Collaborator failure other than not-found.
    #[error("storage: {0}")]
    Storage(#[source] StorageError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            CoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            CoreError::InvalidNodeType { id, expected, actual } => {
                Self::InvalidNodeType { id, expected, actual }
            },
            CoreError::Unprocessable(msg) => Self::Unprocessable(msg),
        }
    }
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Storage(other),
        }
    }
}

impl From<globset::Error> for ServiceError {
    fn from(err: globset::Error) -> Self {
        Self::InvalidArgument(format!("invalid filter pattern: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_not_found_becomes_not_found() {
        let err = ServiceError::from(StorageError::NotFound { entity: "node", id: "x".into() });
        assert!(err.is_not_found());
    }

    #[test]
    fn unavailable_storage_is_transient() {
        let err = ServiceError::from(StorageError::Unavailable("cache down".into()));
        assert!(err.is_transient());
        assert!(!ServiceError::Unprocessable("stale".into()).is_transient());
    }

    #[test]
    fn core_kinds_map_one_to_one() {
        let err = ServiceError::from(CoreError::InvalidArgument("paging".into()));
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        let err = ServiceError::from(CoreError::Unprocessable("job".into()));
        assert!(matches!(err, ServiceError::Unprocessable(_)));
    }
}
