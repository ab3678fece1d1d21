//! Movie use cases - listing, lookup, and validated writes against the store.

mod crud;

use std::sync::Arc;

pub use crud::{MovieError, MovieOps};

/// Container for movie use cases.
pub struct MovieUseCases {
    pub ops: Arc<MovieOps>,
}

impl MovieUseCases {
    pub fn new(ops: Arc<MovieOps>) -> Self {
        Self { ops }
    }
}
