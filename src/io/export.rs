//! JSON export of grid documents

use crate::io::configuration::JSON_INDENT;
use crate::io::error::{GridError, Result, WithPath};
use crate::io::progress::ProgressManager;
use crate::spatial::GridDocument;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of tile records written
    pub tile_count: usize,
    /// Size of the written file
    pub bytes_written: u64,
    /// Destination file
    pub output_path: PathBuf,
}

// Pretty-prints with the configured indent and ends the file with a newline
fn encode<W: Write>(document: &GridDocument, writer: W) -> serde_json::Result<W> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)?;

    let mut writer = serializer.into_inner();
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(writer)
}

// Write failures surface through the encoder; report them as I/O errors
fn encode_error(path: &Path, source: serde_json::Error) -> GridError {
    if source.is_io() {
        GridError::FileSystem {
            path: path.to_path_buf(),
            operation: "write",
            source: source.into(),
        }
    } else {
        GridError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Render a document to the exact bytes [`write_document`] stores
///
/// # Errors
///
/// Returns an error if the encoder fails
pub fn render_document(document: &GridDocument) -> Result<Vec<u8>> {
    encode(document, Vec::new()).map_err(|source| encode_error(Path::new("<memory>"), source))
}

/// Write a document to `path`, replacing any existing file
///
/// The file handle lives only inside this call and is closed on every path
/// out of it. The parent directory must already exist.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created or truncated
/// - Encoding or writing the JSON fails
/// - Buffered output cannot be flushed
pub fn write_document(
    document: &GridDocument,
    path: &Path,
    progress: Option<&ProgressManager>,
) -> Result<ExportSummary> {
    let file = File::create(path).with_path(path, "create")?;
    let buffered = BufWriter::new(file);
    let writer: Box<dyn Write> = match progress {
        Some(pm) => {
            pm.start_write(path);
            Box::new(pm.wrap_write(buffered))
        }
        None => Box::new(buffered),
    };

    let mut writer = encode(document, writer).map_err(|source| encode_error(path, source))?;
    writer.flush().with_path(path, "flush")?;
    drop(writer);

    let bytes_written = std::fs::metadata(path).with_path(path, "inspect")?.len();

    Ok(ExportSummary {
        tile_count: document.len(),
        bytes_written,
        output_path: path.to_path_buf(),
    })
}
