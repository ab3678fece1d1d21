//! In-memory storage adapters - Infrastructure adapters for repository ports

mod movie_repo;

pub use movie_repo::InMemoryMovieRepo;
