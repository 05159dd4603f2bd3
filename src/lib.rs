//! Tilepix - pixel-art tile previews
//!
//! Terminal tooling around the `pixel-tile` crate: YAML configuration,
//! preview rendering and palette listings.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
