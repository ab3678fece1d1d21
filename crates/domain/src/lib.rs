//! Reel domain layer.
//!
//! Pure types shared by every adapter: the movie record, its genre vocabulary,
//! identifiers, and the validation schema that turns untyped request bodies
//! into typed records. Nothing in this crate performs I/O.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;

pub use entities::{Genre, Movie, MoviePatch, NewMovie};
pub use error::DomainError;
pub use ids::MovieId;
pub use validation::{
    validate_movie, validate_partial_movie, IssueCode, PathSegment, ValidationErrors,
    ValidationIssue,
};
