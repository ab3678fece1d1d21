//! Id generator implementations.

use reel_domain::MovieId;

use crate::infrastructure::ports::IdPort;

/// System ids - random UUID v4 strings.
pub struct SystemIds;

impl SystemIds {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdPort for SystemIds {
    fn next_movie_id(&self) -> MovieId {
        MovieId::generate()
    }
}

/// Fixed id for testing.
#[cfg(test)]
pub struct FixedIds(pub &'static str);

#[cfg(test)]
impl IdPort for FixedIds {
    fn next_movie_id(&self) -> MovieId {
        MovieId::from(self.0.to_string())
    }
}
