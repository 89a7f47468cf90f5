//! Data-driven content definitions and loaders.
//!
//! This crate turns data files into the read-only configuration the core
//! consumes at startup:
//! - Item catalogs (RON)
//! - Game configuration (TOML)
//!
//! Content is loaded once and never appears in game state. All loaders use
//! rogue-core types directly with serde for deserialization; default data
//! files ship under `data/`.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult};
