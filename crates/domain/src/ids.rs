use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque movie identifier.
///
/// New ids are UUID v4 strings, but any non-blank string loaded from the seed
/// is accepted and compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an id supplied from outside, rejecting blank values.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("Movie id cannot be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path segments are looked up verbatim; an unknown value is simply not found.
impl From<String> for MovieId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
