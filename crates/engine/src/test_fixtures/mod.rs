//! Common test helpers: movie builders and a ready-to-use application.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{movie, movie_id};
//!
//! let repo = InMemoryMovieRepo::with_movies(vec![movie("a", "Alpha", &[Genre::Action])]);
//! assert!(repo.get(&movie_id("a")).await.unwrap().is_some());
//! ```

use std::sync::Arc;

use serde_json::{json, Value};

use reel_domain::{Genre, Movie, MovieId};

use crate::app::App;
use crate::infrastructure::ids::SystemIds;
use crate::infrastructure::memory::InMemoryMovieRepo;

pub fn movie_id(id: &str) -> MovieId {
    MovieId::from(id.to_string())
}

/// A valid movie with the given id, title and genres.
pub fn movie(id: &str, title: &str, genre: &[Genre]) -> Movie {
    Movie {
        id: movie_id(id),
        title: title.to_string(),
        year: 2000,
        director: "Some Director".to_string(),
        duration: 120.0,
        rate: 7.5,
        poster: format!("https://movies.com/posters/{}.jpg", id),
        genre: genre.to_vec(),
    }
}

/// Creation body for Dune, without `rate`.
pub fn dune_body() -> Value {
    json!({
        "title": "Dune",
        "year": 2021,
        "director": "D. Villeneuve",
        "duration": 155,
        "poster": "https://x.com/p.jpg",
        "genre": ["Drama"]
    })
}

/// Three movies: `a` (Action), `b` (Drama), `c` (Drama, Action).
pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie("a", "Alpha", &[Genre::Action]),
        movie("b", "Bravo", &[Genre::Drama]),
        movie("c", "Charlie", &[Genre::Drama, Genre::Action]),
    ]
}

/// Application over an in-memory store seeded with [`sample_movies`].
pub fn test_app() -> Arc<App> {
    Arc::new(App::new(
        Arc::new(InMemoryMovieRepo::with_movies(sample_movies())),
        Arc::new(SystemIds::new()),
    ))
}
