//! Spatial data structures for tile grids
//!
//! This module contains:
//! - Validated grid configuration and generation
//! - Tile records and the serialized document container

/// Grid configuration, tile storage and generation
pub mod grid;
/// Tile records and document coverage checks
pub mod tiles;

pub use grid::{GridConfig, TileGrid, generate};
pub use tiles::{GridDocument, Tile};
