//! Domain entities - Core business objects with identity

mod genre;
mod movie;

pub use genre::Genre;
pub use movie::{Movie, MoviePatch, NewMovie};
