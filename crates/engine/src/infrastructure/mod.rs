//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod ids;
pub mod memory;
pub mod ports;
pub mod seed;
