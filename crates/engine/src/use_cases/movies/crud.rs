//! Movie CRUD over the store port, with body validation in front of writes.

use std::sync::Arc;

use serde_json::Value;

use reel_domain::{validate_movie, validate_partial_movie, Movie, MovieId, ValidationErrors};

use crate::infrastructure::ports::{IdPort, MovieRepo, RepoError};

pub struct MovieOps {
    movies: Arc<dyn MovieRepo>,
    ids: Arc<dyn IdPort>,
}

impl MovieOps {
    pub fn new(movies: Arc<dyn MovieRepo>, ids: Arc<dyn IdPort>) -> Self {
        Self { movies, ids }
    }

    /// All movies in store order, optionally narrowed to one genre.
    ///
    /// The genre comparison ignores case and matches whole tags only. An empty
    /// filter is the same as no filter.
    pub async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>, MovieError> {
        let movies = self.movies.list().await?;
        match genre.filter(|g| !g.is_empty()) {
            Some(genre) => Ok(movies
                .into_iter()
                .filter(|movie| movie.has_genre(genre))
                .collect()),
            None => Ok(movies),
        }
    }

    pub async fn get(&self, id: &MovieId) -> Result<Movie, MovieError> {
        self.movies
            .get(id)
            .await?
            .ok_or_else(|| MovieError::NotFound(id.clone()))
    }

    /// Validate a full movie body, assign it a new id, and append it.
    pub async fn create(&self, body: &Value) -> Result<Movie, MovieError> {
        let new_movie = validate_movie(body).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected movie creation");
        })?;

        let movie = Movie::from_new(self.ids.next_movie_id(), new_movie);
        self.movies.insert(movie.clone()).await?;

        tracing::info!(movie_id = %movie.id, title = %movie.title, "Created movie");
        Ok(movie)
    }

    /// Patch the supplied fields of an existing movie.
    ///
    /// An unknown id is reported as not found before the body is looked at.
    /// A body with no recognized fields leaves the movie unchanged.
    pub async fn update(&self, id: &MovieId, body: &Value) -> Result<Movie, MovieError> {
        let existing = self
            .movies
            .get(id)
            .await?
            .ok_or_else(|| MovieError::NotFound(id.clone()))?;

        let patch = validate_partial_movie(body).inspect_err(|e| {
            tracing::debug!(movie_id = %id, error = %e, "Rejected movie update");
        })?;
        if patch.is_empty() {
            return Ok(existing);
        }

        let movie = self
            .movies
            .update(id, patch)
            .await?
            .ok_or_else(|| MovieError::NotFound(id.clone()))?;

        tracing::info!(movie_id = %id, "Updated movie");
        Ok(movie)
    }

    pub async fn delete(&self, id: &MovieId) -> Result<(), MovieError> {
        if !self.movies.remove(id).await? {
            return Err(MovieError::NotFound(id.clone()));
        }
        tracing::info!(movie_id = %id, "Deleted movie");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(MovieId),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ids::FixedIds;
    use crate::infrastructure::ports::MockMovieRepo;
    use crate::test_fixtures::{dune_body, movie, movie_id};
    use mockall::predicate::*;
    use reel_domain::{Genre, MoviePatch};
    use serde_json::json;

    fn ops(repo: MockMovieRepo) -> MovieOps {
        MovieOps::new(Arc::new(repo), Arc::new(FixedIds("new-id")))
    }

    #[tokio::test]
    async fn list_filters_by_genre_case_insensitively() {
        let mut repo = MockMovieRepo::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                movie("a", "Alpha", &[Genre::Action]),
                movie("b", "Bravo", &[Genre::Drama]),
                movie("c", "Charlie", &[Genre::Drama, Genre::Action]),
            ])
        });

        let movies = ops(repo).list(Some("aCtIoN")).await.unwrap();
        let ids: Vec<_> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[tokio::test]
    async fn empty_genre_filter_returns_everything() {
        let mut repo = MockMovieRepo::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                movie("a", "Alpha", &[Genre::Action]),
                movie("b", "Bravo", &[Genre::Drama]),
            ])
        });

        assert_eq!(ops(repo).list(Some("")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .with(eq(movie_id("nope")))
            .returning(|_| Ok(None));

        let err = ops(repo).get(&movie_id("nope")).await.unwrap_err();
        assert!(matches!(err, MovieError::NotFound(id) if id.as_str() == "nope"));
    }

    #[tokio::test]
    async fn create_assigns_id_and_default_rate() {
        let mut repo = MockMovieRepo::new();
        repo.expect_insert()
            .withf(|movie| movie.id.as_str() == "new-id" && movie.rate == 5.5)
            .times(1)
            .returning(|_| Ok(()));

        let movie = ops(repo).create(&dune_body()).await.unwrap();
        assert_eq!(movie.id.as_str(), "new-id");
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.rate, 5.5);
    }

    #[tokio::test]
    async fn create_invalid_body_never_touches_the_store() {
        let mut repo = MockMovieRepo::new();
        repo.expect_insert().never();

        let err = ops(repo)
            .create(&json!({ "year": 2021 }))
            .await
            .unwrap_err();
        match err {
            MovieError::Validation(errors) => assert!(errors.mentions("title")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_surfaces_repo_errors() {
        let mut repo = MockMovieRepo::new();
        repo.expect_insert()
            .returning(|movie| Err(RepoError::duplicate("Movie", &movie.id)));

        let err = ops(repo).create(&dune_body()).await.unwrap_err();
        assert!(matches!(err, MovieError::Repo(_)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_even_with_invalid_body() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_update().never();

        let err = ops(repo)
            .update(&movie_id("ghost"), &json!({ "year": "soon" }))
            .await
            .unwrap_err();
        assert!(matches!(err, MovieError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_invalid_body_does_not_mutate() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .returning(|_| Ok(Some(movie("a", "Alpha", &[Genre::Action]))));
        repo.expect_update().never();

        let err = ops(repo)
            .update(&movie_id("a"), &json!({ "rate": 11 }))
            .await
            .unwrap_err();
        assert!(matches!(err, MovieError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_update_returns_stored_movie_without_writing() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .returning(|_| Ok(Some(movie("a", "Alpha", &[Genre::Action]))));
        repo.expect_update().never();

        let movie = ops(repo)
            .update(&movie_id("a"), &json!({ "unknown": true }))
            .await
            .unwrap();
        assert_eq!(movie.title, "Alpha");
    }

    #[tokio::test]
    async fn update_passes_only_supplied_fields() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .returning(|_| Ok(Some(movie("a", "Alpha", &[Genre::Action]))));
        repo.expect_update()
            .with(
                eq(movie_id("a")),
                eq(MoviePatch {
                    year: Some(1999),
                    ..Default::default()
                }),
            )
            .returning(|_, patch| {
                let mut stored = movie("a", "Alpha", &[Genre::Action]);
                stored.apply(patch);
                Ok(Some(stored))
            });

        let updated = ops(repo)
            .update(&movie_id("a"), &json!({ "year": 1999 }))
            .await
            .unwrap();
        assert_eq!(updated.year, 1999);
        assert_eq!(updated.title, "Alpha");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let mut repo = MockMovieRepo::new();
        repo.expect_remove().returning(|_| Ok(false));

        let err = ops(repo).delete(&movie_id("gone")).await.unwrap_err();
        assert!(matches!(err, MovieError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_existing_succeeds() {
        let mut repo = MockMovieRepo::new();
        repo.expect_remove()
            .with(eq(movie_id("a")))
            .times(1)
            .returning(|_| Ok(true));

        assert!(ops(repo).delete(&movie_id("a")).await.is_ok());
    }
}
