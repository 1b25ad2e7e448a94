//! CLI entry point for the tile grid generator

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tilegrid::io::cli::{Cli, GridProcessor};

// Allow print for the operator-facing status line and diagnostics
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let processor = GridProcessor::new(cli);

    match processor.process() {
        Ok(report) => {
            if processor.should_report() {
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
