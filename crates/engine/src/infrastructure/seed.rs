//! Startup seed for the movie store.
//!
//! The seed is a JSON array of complete movie records, ids included. Each
//! record goes through the same full validation as a creation request, so a
//! bad seed stops the server at startup instead of serving invalid data.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use tokio::fs;

use reel_domain::{validate_movie, Movie, MovieId};

/// Seed compiled into the binary, used when no seed path is configured.
const BUNDLED_SEED: &str = include_str!("../../data/movies.json");

/// Load the seed from `path`, or the bundled seed when `path` is `None`.
pub async fn load_seed(path: Option<&Path>) -> Result<Vec<Movie>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read movie seed {}", path.display()))?;
            parse_seed(&content)
                .with_context(|| format!("Invalid movie seed {}", path.display()))
        }
        None => parse_seed(BUNDLED_SEED).context("Invalid bundled movie seed"),
    }
}

/// Parse and validate seed records, rejecting duplicate ids.
pub fn parse_seed(content: &str) -> Result<Vec<Movie>> {
    let records: Vec<Value> =
        serde_json::from_str(content).context("Seed must be a JSON array of movies")?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut movies = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Seed record {} has no string id", index))?;
        let id = MovieId::parse(id).with_context(|| format!("Seed record {}", index))?;

        if !seen.insert(id.clone()) {
            bail!("Seed record {} repeats id {}", index, id);
        }

        let movie = validate_movie(record)
            .with_context(|| format!("Seed record {} ({})", index, id))?;
        movies.push(Movie::from_new(id, movie));
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_MOVIES: &str = r#"[
        {"id": "m1", "title": "One", "year": 2001, "director": "A", "duration": 90,
         "poster": "https://movies.com/1.jpg", "genre": ["Drama"], "rate": 7},
        {"id": "m2", "title": "Two", "year": 2002, "director": "B", "duration": 100,
         "poster": "https://movies.com/2.jpg", "genre": ["Comedy"]}
    ]"#;

    #[test]
    fn bundled_seed_is_valid() {
        let movies = parse_seed(BUNDLED_SEED).unwrap();
        assert!(!movies.is_empty());
    }

    #[test]
    fn parses_records_in_order_with_defaults() {
        let movies = parse_seed(TWO_MOVIES).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id.as_str(), "m1");
        assert_eq!(movies[0].rate, 7.0);
        assert_eq!(movies[1].rate, 5.5);
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let seed = TWO_MOVIES.replace("\"m2\"", "\"m1\"");
        let err = parse_seed(&seed).unwrap_err();
        assert!(err.to_string().contains("repeats id m1"));
    }

    #[test]
    fn missing_id_is_fatal() {
        let seed = TWO_MOVIES.replace("\"id\": \"m2\",", "");
        assert!(parse_seed(&seed).is_err());
    }

    #[test]
    fn invalid_record_is_fatal() {
        let seed = TWO_MOVIES.replace("2002", "1800");
        assert!(parse_seed(&seed).is_err());
    }

    #[test]
    fn non_array_is_fatal() {
        assert!(parse_seed("{}").is_err());
    }

    #[tokio::test]
    async fn loads_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_MOVIES.as_bytes()).unwrap();

        let movies = load_seed(Some(file.path())).await.unwrap();
        assert_eq!(movies.len(), 2);
    }

    #[tokio::test]
    async fn unreadable_seed_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(load_seed(Some(&missing)).await.is_err());
    }

    #[tokio::test]
    async fn falls_back_to_bundled_seed() {
        let movies = load_seed(None).await.unwrap();
        assert_eq!(movies, parse_seed(BUNDLED_SEED).unwrap());
    }
}
