use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Entity name used by the parameter store.
    pub const SYSTEM_PARAMETER: &'static str = "SystemParameter";

    pub fn parameter_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: Self::SYSTEM_PARAMETER,
            id: id.to_string(),
        }
    }

    pub fn parameter_exists(id: impl ToString) -> Self {
        Self::AlreadyExists {
            entity_type: Self::SYSTEM_PARAMETER,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_not_found_display() {
        let error = RepositoryError::parameter_not_found("abc-123");
        assert_eq!(error.to_string(), "SystemParameter not found: abc-123");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_parameter_exists_display() {
        let error = RepositoryError::parameter_exists("abc-123");
        assert_eq!(error.to_string(), "SystemParameter already exists: abc-123");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("database is locked".to_string());
        assert_eq!(error.to_string(), "Connection failed: database is locked");
    }

    #[test]
    fn test_serialization_display() {
        let error = RepositoryError::Serialization("bad tag list".to_string());
        assert_eq!(error.to_string(), "Serialization error: bad tag list");
    }
}
