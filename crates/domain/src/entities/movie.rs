//! Movie entity - the single record type held by the store

use serde::Serialize;

use super::Genre;
use crate::ids::MovieId;

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes
    #[serde(serialize_with = "number::serialize")]
    pub duration: f64,
    /// Score out of ten
    #[serde(serialize_with = "number::serialize")]
    pub rate: f64,
    /// Poster image URL
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A fully validated movie that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: f64,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Validated subset of movie fields supplied to a partial update.
///
/// `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<f64>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl Movie {
    pub fn from_new(id: MovieId, movie: NewMovie) -> Self {
        Self {
            id,
            title: movie.title,
            year: movie.year,
            director: movie.director,
            duration: movie.duration,
            rate: movie.rate,
            poster: movie.poster,
            genre: movie.genre,
        }
    }

    /// Shallow merge: supplied fields replace stored ones, the id never changes.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    /// True when any of the movie's genres equals `tag`, ignoring case.
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches_tag(tag))
    }
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Converts a patch into a complete record, or `None` if any field is missing.
    pub fn into_new_movie(self) -> Option<NewMovie> {
        Some(NewMovie {
            title: self.title?,
            year: self.year?,
            director: self.director?,
            duration: self.duration?,
            rate: self.rate?,
            poster: self.poster?,
            genre: self.genre?,
        })
    }
}

/// Writes whole numbers as JSON integers so `155` round-trips as `155`, not `155.0`.
mod number {
    use serde::Serializer;

    // Largest integer an f64 holds exactly.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
