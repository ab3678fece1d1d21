//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{IdPort, MovieRepo};
use crate::use_cases::{MovieOps, MovieUseCases};

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub movies: MovieUseCases,
}

impl App {
    pub fn new(movies: Arc<dyn MovieRepo>, ids: Arc<dyn IdPort>) -> Self {
        let movie_ops = Arc::new(MovieOps::new(movies, ids));

        Self {
            use_cases: UseCases {
                movies: MovieUseCases::new(movie_ops),
            },
        }
    }
}
