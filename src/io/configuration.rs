//! Generation defaults and safety limits

// Defaults reproduce the fixed grid the asset pipeline was first fed
/// Default grid width in tiles
pub const DEFAULT_WIDTH: i64 = 75;
/// Default grid height in tiles
pub const DEFAULT_HEIGHT: i64 = 75;

/// Default tile category written to every record
pub const DEFAULT_TILE_KIND: &str = "grass";

/// Default layer (z) index
pub const DEFAULT_LAYER: i32 = 0;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "grass_grid.json";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: u32 = 10_000;

// Output settings
/// Indentation used by the pretty JSON writer
pub const JSON_INDENT: &[u8] = b"  ";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
