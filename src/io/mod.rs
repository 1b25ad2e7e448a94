//! Input/output for the grid generator
//!
//! This module contains:
//! - Command-line parsing and orchestration
//! - Defaults and limits
//! - Error types
//! - JSON export and status display

/// Command-line arguments and the generate/export pipeline
pub mod cli;
/// Generation defaults and safety limits
pub mod configuration;
/// Error taxonomy and path context
pub mod error;
/// JSON export of grid documents
pub mod export;
/// Terminal status display
pub mod progress;
