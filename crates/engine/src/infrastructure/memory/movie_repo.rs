//! In-memory movie store
//!
//! A `Vec` behind a single async lock, searched linearly by id. Nothing is
//! persisted; the contents live as long as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use reel_domain::{Movie, MovieId, MoviePatch};

use crate::infrastructure::ports::{MovieRepo, RepoError};

/// Insertion-ordered movie store.
pub struct InMemoryMovieRepo {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Start from a pre-populated seed. Callers are responsible for id uniqueness.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

impl Default for InMemoryMovieRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepo for InMemoryMovieRepo {
    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        Ok(self.movies.read().await.clone())
    }

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, RepoError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|movie| &movie.id == id).cloned())
    }

    async fn insert(&self, movie: Movie) -> Result<(), RepoError> {
        let mut movies = self.movies.write().await;
        if movies.iter().any(|existing| existing.id == movie.id) {
            return Err(RepoError::duplicate("Movie", &movie.id));
        }
        movies.push(movie);
        Ok(())
    }

    async fn update(&self, id: &MovieId, patch: MoviePatch) -> Result<Option<Movie>, RepoError> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|movie| &movie.id == id) else {
            return Ok(None);
        };
        movie.apply(patch);
        Ok(Some(movie.clone()))
    }

    async fn remove(&self, id: &MovieId) -> Result<bool, RepoError> {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|movie| &movie.id == id) {
            Some(index) => {
                // `remove`, not `swap_remove`: listing order must survive deletes.
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
