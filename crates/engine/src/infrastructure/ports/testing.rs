use reel_domain::MovieId;

/// Source of new movie ids, injected so tests can pin them.
pub trait IdPort: Send + Sync {
    fn next_movie_id(&self) -> MovieId;
}
