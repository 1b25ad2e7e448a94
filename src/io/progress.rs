//! Terminal status display for the generate and write stages

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static GENERATE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static WRITE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{bytes}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Single spinner that follows one grid through generation and export
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a visible spinner drawn to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(GENERATE_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that tracks state without drawing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Announce tile generation for a grid extent
    pub fn start_generation(&self, width: u32, height: u32) {
        self.bar.set_style(GENERATE_STYLE.clone());
        self.bar.set_message(format!("Generating {width}x{height} grid"));
        self.bar
            .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    /// Announce the export stage and reset the byte counter
    pub fn start_write(&self, path: &Path) {
        self.bar.set_style(WRITE_STYLE.clone());
        self.bar.set_position(0);
        self.bar.set_message(format!("Writing {}", path.display()));
    }

    /// Wrap a writer so every byte written advances the counter
    pub fn wrap_write<W: Write>(&self, writer: W) -> ProgressBarIter<W> {
        self.bar.wrap_write(writer)
    }

    /// Bytes counted since the last [`Self::start_write`]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
