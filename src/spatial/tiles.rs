//! Tile records and the top-level grid document

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result, invalid_parameter};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Static content of one grid cell
///
/// Field names and order are part of the output format consumed by the
/// asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Tile kind tag
    pub category: String,
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
    /// Layer index
    pub z: i32,
}

impl Tile {
    /// Create a tile record
    pub fn new(category: impl Into<String>, x: u32, y: u32, z: i32) -> Self {
        Self {
            category: category.into(),
            x,
            y,
            z,
        }
    }

    /// Planar coordinates as `[x, y]`
    pub const fn coordinates(&self) -> [u32; 2] {
        [self.x, self.y]
    }
}

/// Serialized container holding every tile of a grid in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    /// Tile records, outer loop over `y`, inner loop over `x`
    pub tiles: Vec<Tile>,
}

impl GridDocument {
    /// Wrap an ordered tile sequence
    pub const fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tile records
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the document holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check that the tiles cover `[0, width) x [0, height)` exactly once
    ///
    /// Uses one bit per cell, indexed row-major.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] if either dimension exceeds
    /// [`MAX_GRID_DIMENSION`], or [`GridError::IncompleteGrid`] with the
    /// offending counts if any coordinate is missing, repeated, or outside
    /// the extent
    pub fn verify_coverage(&self, width: u32, height: u32) -> Result<()> {
        for (parameter, dimension) in [("width", width), ("height", height)] {
            if dimension > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &dimension,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let width = width as usize;
        let cells = width * height as usize;
        let mut seen = bitvec![0; cells];
        let mut duplicates = 0;
        let mut out_of_bounds = 0;

        for tile in &self.tiles {
            let (x, y) = (tile.x as usize, tile.y as usize);
            if x >= width {
                out_of_bounds += 1;
                continue;
            }
            let index = y * width + x;
            if index >= cells {
                out_of_bounds += 1;
            } else if seen.get(index).as_deref() == Some(&true) {
                duplicates += 1;
            } else {
                seen.set(index, true);
            }
        }

        let missing = seen.count_zeros();
        if missing == 0 && duplicates == 0 && out_of_bounds == 0 {
            Ok(())
        } else {
            Err(GridError::IncompleteGrid {
                missing,
                duplicates,
                out_of_bounds,
            })
        }
    }
}
