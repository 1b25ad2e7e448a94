//! Uniform tile grid generator for game-asset pipelines
//!
//! Enumerates every coordinate of a rectangular grid in row-major order,
//! produces one tile record per cell with a constant category and layer,
//! and writes the collection as a JSON document of the form
//! `{"tiles": [{"category", "x", "y", "z"}, ...]}`.

#![forbid(unsafe_code)]

/// Command-line handling, configuration defaults, export and error handling
pub mod io;
/// Grid configuration, tile records and generation
pub mod spatial;

pub use io::error::{GridError, Result};
