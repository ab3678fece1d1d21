//! Repository port traits for movie storage.

use async_trait::async_trait;
use reel_domain::{Movie, MovieId, MoviePatch};

use super::error::RepoError;

/// Ordered movie collection.
///
/// Implementations keep insertion order: `list` returns movies in the order
/// they were inserted and `remove` preserves the order of the rest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, RepoError>;
    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, RepoError>;
    /// Append a movie. Fails with `RepoError::Duplicate` if the id is taken.
    async fn insert(&self, movie: Movie) -> Result<(), RepoError>;
    /// Merge `patch` into the stored movie; `None` if no movie has this id.
    async fn update(&self, id: &MovieId, patch: MoviePatch) -> Result<Option<Movie>, RepoError>;
    /// Remove a movie; `false` if no movie has this id.
    async fn remove(&self, id: &MovieId) -> Result<bool, RepoError>;
}
