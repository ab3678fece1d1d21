//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// An entity with the same id is already stored.
    #[error("{entity_type} already exists: {id}")]
    Duplicate {
        entity_type: &'static str,
        id: String,
    },
}

impl RepoError {
    /// Create a Duplicate error with entity type and ID context.
    pub fn duplicate(entity_type: &'static str, id: impl ToString) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.to_string(),
        }
    }
}
