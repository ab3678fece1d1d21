//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod movies;

// Re-export main types
pub use movies::{MovieError, MovieOps, MovieUseCases};
