//! Command-line interface for generating a tile grid document

use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_LAYER, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_KIND, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::export::{ExportSummary, write_document};
use crate::io::progress::ProgressManager;
use crate::spatial::{GridConfig, generate};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(
    author,
    version,
    about = "Generate a uniform tile grid as a JSON map document"
)]
/// Command-line arguments for the grid generator
pub struct Cli {
    /// Grid width in tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i64,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i64,

    /// Category tag written to every tile
    #[arg(short = 'k', long, default_value = DEFAULT_TILE_KIND)]
    pub tile_kind: String,

    /// Layer (z) index written to every tile
    #[arg(short = 'z', long, default_value_t = DEFAULT_LAYER, allow_negative_numbers = true)]
    pub layer: i32,

    /// Output JSON file, overwritten if present
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the arguments into a generation config
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension or the tile kind is rejected
    pub fn to_config(&self) -> Result<GridConfig> {
        GridConfig::new(
            self.width,
            self.height,
            self.tile_kind.clone(),
            self.layer,
            self.output.clone(),
        )
    }
}

/// Result of one generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Category written to every tile
    pub tile_kind: String,
    /// Layer written to every tile
    pub layer: i32,
    /// What was written and where
    pub summary: ExportSummary,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {}x{} grid of {} '{}' tiles (layer {}) -> {}",
            self.width,
            self.height,
            self.summary.tile_count,
            self.tile_kind,
            self.layer,
            self.summary.output_path.display()
        )
    }
}

/// Runs validation, generation and export for one set of arguments
pub struct GridProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GridProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Check if the final status line should be printed
    pub const fn should_report(&self) -> bool {
        self.cli.should_show_progress()
    }

    /// Generate the grid and write it to the configured path
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, the coverage check,
    /// or the file write fails
    pub fn process(&self) -> Result<GenerationReport> {
        let config = self.cli.to_config()?;
        let result = self.run(&config);

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    fn run(&self, config: &GridConfig) -> Result<GenerationReport> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_generation(config.width(), config.height());
        }

        let document = generate(config);
        document.verify_coverage(config.width(), config.height())?;

        let summary = write_document(
            &document,
            config.output_path(),
            self.progress_manager.as_ref(),
        )?;

        Ok(GenerationReport {
            width: config.width(),
            height: config.height(),
            tile_kind: config.tile_kind().to_string(),
            layer: config.layer(),
            summary,
        })
    }
}
