//! Reel Engine library.
//!
//! This crate contains all server-side code for the movies API.
//!
//! ## Structure
//!
//! - `use_cases/` - Movie operations orchestrating validation and storage
//! - `infrastructure/` - Store port and in-memory adapter, seed, configuration
//! - `api/` - HTTP entry points and the cross-origin policy
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for unit and router tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
