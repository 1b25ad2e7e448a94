//! Tests for command-line parsing and the generate/export pipeline

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tilegrid::io::cli::{Cli, GenerationReport, GridProcessor};
    use tilegrid::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_LAYER, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_KIND, DEFAULT_WIDTH,
    };
    use tilegrid::io::export::ExportSummary;
    use tilegrid::spatial::GridDocument;

    fn quiet_cli(output: &std::path::Path, extra: &[&str]) -> Cli {
        let mut args = vec!["program", "--quiet", "--output", output.to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments falls back to defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.tile_kind, DEFAULT_TILE_KIND);
        assert_eq!(cli.layer, DEFAULT_LAYER);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--width",
            "12",
            "--height",
            "8",
            "--tile-kind",
            "sand",
            "--layer",
            "2",
            "--output",
            "maps/sand.json",
            "--quiet",
        ]);

        assert_eq!(cli.width, 12);
        assert_eq!(cli.height, 8);
        assert_eq!(cli.tile_kind, "sand");
        assert_eq!(cli.layer, 2);
        assert_eq!(cli.output, PathBuf::from("maps/sand.json"));
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
    }

    // Tests short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "-W", "3", "-H", "2", "-k", "dirt", "-z", "1", "-o", "d.json", "-q",
        ]);

        assert_eq!((cli.width, cli.height), (3, 2));
        assert_eq!(cli.tile_kind, "dirt");
        assert_eq!(cli.layer, 1);
        assert_eq!(cli.output, PathBuf::from("d.json"));
        assert!(cli.quiet);
    }

    // Tests negative numbers reach validation rather than the parser
    // Verified by removing allow_negative_numbers
    #[test]
    fn test_cli_negative_values_parse() {
        let cli = Cli::parse_from(["program", "--width", "-4", "--layer", "-1"]);

        assert_eq!(cli.width, -4);
        assert_eq!(cli.layer, -1);
        assert!(cli.to_config().is_err_and(|err| err.is_validation()));
    }

    #[test]
    fn test_to_config() {
        let cli = Cli::parse_from(["program", "-W", "5", "-H", "4", "-k", "snow"]);
        let config = cli.to_config().unwrap();

        assert_eq!((config.width(), config.height()), (5, 4));
        assert_eq!(config.tile_kind(), "snow");
    }

    // Tests the full pipeline writes the row-major 3x2 document
    // Verified by swapping loop order in generation
    #[test]
    fn test_process_writes_document() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("grass_grid.json");
        let processor = GridProcessor::new(quiet_cli(&output, &["-W", "3", "-H", "2"]));

        let report = processor.process().unwrap();
        assert_eq!(report.summary.tile_count, 6);
        assert_eq!(report.summary.output_path, output);
        assert!(!processor.should_report());

        let parsed: GridDocument = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        let coordinates: Vec<(u32, u32, i32)> =
            parsed.tiles.iter().map(|t| (t.x, t.y, t.z)).collect();
        assert_eq!(
            coordinates,
            vec![
                (0, 0, 0),
                (1, 0, 0),
                (2, 0, 0),
                (0, 1, 0),
                (1, 1, 0),
                (2, 1, 0)
            ]
        );
        assert!(parsed.tiles.iter().all(|t| t.category == "grass"));
    }

    // Tests validation failures leave no output behind
    // Verified by generating before validating
    #[test]
    fn test_process_rejects_zero_width_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("grid.json");
        let processor = GridProcessor::new(quiet_cli(&output, &["--width", "0"]));

        let err = processor.process().unwrap_err();
        assert!(err.is_validation());
        assert!(!output.exists());
    }

    #[test]
    fn test_process_reports_io_failure() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("no_such_dir").join("grid.json");
        let processor = GridProcessor::new(quiet_cli(&output, &["-W", "2", "-H", "2"]));

        let err = processor.process().unwrap_err();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("no_such_dir"));
    }

    // Tests the visible progress path produces the same file
    #[test]
    fn test_process_with_progress() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("grid.json");
        let cli = Cli::parse_from([
            "program",
            "-W",
            "4",
            "-H",
            "4",
            "-o",
            output.to_str().unwrap(),
        ]);
        let processor = GridProcessor::new(cli);

        let report = processor.process().unwrap();
        assert!(processor.should_report());
        assert_eq!(report.summary.bytes_written, fs::metadata(&output).unwrap().len());
    }

    // Tests the operator message names the count and destination
    // Verified by printing the configured dimensions instead of the written count
    #[test]
    fn test_generation_report_display() {
        let report = GenerationReport {
            width: 75,
            height: 75,
            tile_kind: "grass".to_string(),
            layer: 0,
            summary: ExportSummary {
                tile_count: 5625,
                bytes_written: 1024,
                output_path: PathBuf::from("grass_grid.json"),
            },
        };

        assert_eq!(
            report.to_string(),
            "Generated 75x75 grid of 5625 'grass' tiles (layer 0) -> grass_grid.json"
        );
    }
}
