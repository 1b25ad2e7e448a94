//! Grid configuration and row-major tile generation
//!
//! A [`GridConfig`] is validated once at construction, so every value that
//! reaches [`TileGrid`] describes a non-empty rectangle. Tiles are stored in an
//! `(height, width)` array indexed `[row, col]`, which makes the standard
//! iteration order of the array the row-major order of the output document.

use ndarray::Array2;
use std::path::{Path, PathBuf};

use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_LAYER, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_KIND, DEFAULT_WIDTH,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{GridDocument, Tile};

/// Validated generation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    width: u32,
    height: u32,
    tile_kind: String,
    layer: i32,
    output_path: PathBuf,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as u32,
            height: DEFAULT_HEIGHT as u32,
            tile_kind: DEFAULT_TILE_KIND.to_string(),
            layer: DEFAULT_LAYER,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl GridConfig {
    /// Create a configuration, rejecting unusable values
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidParameter`] if:
    /// - `width` or `height` is zero or negative
    /// - `width` or `height` exceeds [`MAX_GRID_DIMENSION`]
    /// - `tile_kind` is empty or only whitespace
    pub fn new(
        width: i64,
        height: i64,
        tile_kind: impl Into<String>,
        layer: i32,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            width: validate_dimension("width", width)?,
            height: validate_dimension("height", height)?,
            tile_kind: validate_tile_kind(tile_kind.into())?,
            layer,
            output_path: output_path.into(),
        })
    }

    /// Replace the grid extent
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension fails validation
    pub fn with_dimensions(mut self, width: i64, height: i64) -> Result<Self> {
        self.width = validate_dimension("width", width)?;
        self.height = validate_dimension("height", height)?;
        Ok(self)
    }

    /// Replace the tile category
    ///
    /// # Errors
    ///
    /// Returns an error if the category is empty
    pub fn with_tile_kind(mut self, tile_kind: impl Into<String>) -> Result<Self> {
        self.tile_kind = validate_tile_kind(tile_kind.into())?;
        Ok(self)
    }

    /// Replace the layer index
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Replace the output location
    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Grid width in tiles
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Category written to every tile
    pub fn tile_kind(&self) -> &str {
        &self.tile_kind
    }

    /// Layer written to every tile
    pub const fn layer(&self) -> i32 {
        self.layer
    }

    /// Destination file
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Number of tiles a grid of this extent holds
    pub const fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn validate_dimension(parameter: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }

    u32::try_from(value)
        .ok()
        .filter(|&dimension| dimension <= MAX_GRID_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            )
        })
}

fn validate_tile_kind(tile_kind: String) -> Result<String> {
    if tile_kind.trim().is_empty() {
        return Err(invalid_parameter(
            "tile_kind",
            &tile_kind,
            &"must not be empty",
        ));
    }
    Ok(tile_kind)
}

/// Rectangular tile storage indexed `[row, col]`
#[derive(Debug, Clone)]
pub struct TileGrid {
    cells: Array2<Tile>,
}

impl TileGrid {
    /// Fill every cell of the configured extent with the configured tile
    pub fn new(config: &GridConfig) -> Self {
        let shape = (config.height() as usize, config.width() as usize);
        let cells = Array2::from_shape_fn(shape, |(row, col)| {
            Tile::new(config.tile_kind(), col as u32, row as u32, config.layer())
        });

        Self { cells }
    }

    /// Grid width in tiles
    pub fn width(&self) -> u32 {
        self.cells.ncols() as u32
    }

    /// Grid height in tiles
    pub fn height(&self) -> u32 {
        self.cells.nrows() as u32
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tile at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        self.cells.get([y as usize, x as usize])
    }

    /// Flatten into a document in row-major order
    pub fn to_document(&self) -> GridDocument {
        GridDocument::new(self.cells.iter().cloned().collect())
    }
}

/// Build the complete document for a configuration
pub fn generate(config: &GridConfig) -> GridDocument {
    TileGrid::new(config).to_document()
}
