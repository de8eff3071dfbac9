//! Error types for port operations.

/// Remote row-store operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Remote call failed - includes operation name for tracing.
    #[error("Store error in {operation}: {message}")]
    Store {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization of a row payload failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The row store rejected the caller's credentials.
    #[error("Not authorized")]
    Unauthorized,
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Store error with operation context.
    pub fn store(operation: &'static str, message: impl ToString) -> Self {
        Self::Store {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors from the export/import bridge.
///
/// Each rejection reason is a distinct variant so the caller can produce
/// distinguishable user-facing messages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransferError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to read file: {0}")]
    Unreadable(String),

    #[error("Failed to write file: {0}")]
    Unwritable(String),

    #[error("Could not parse JSON file: {0}")]
    InvalidJson(String),

    /// The payload parsed as JSON but is not structurally a character.
    #[error("Invalid character payload: {0}")]
    InvalidPayload(String),
}
