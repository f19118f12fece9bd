//! SVG card output writer.
//!
//! Writes SVG content to files with proper encoding.

use crate::render::RenderedCard;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Arguments
/// * `svg_content` - SVG string from the card renderer
/// * `output_path` - Path to output SVG file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing SVG to: {}", output_path.display());

    validate_svg_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!("Cannot create directory: {}", e)))?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;

    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Generated: {} ({:.2} KB)",
        output_path.display(),
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}

/// Write every card into `dir` under its theme's file name
///
/// All paths are validated before the first byte is written, so a bad
/// path never leaves one theme updated and the other stale.
pub fn write_cards(cards: &[RenderedCard], dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
    let paths: Vec<PathBuf> = cards.iter().map(|card| dir.join(card.file_name())).collect();

    for path in &paths {
        validate_svg_path(path)?;
    }

    for (card, path) in cards.iter().zip(&paths) {
        write_svg(&card.svg, path)?;
    }

    Ok(paths)
}

/// Validate output path for SVG
///
/// **Private** - internal validation
fn validate_svg_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(ext) = path.extension() {
        if ext != "svg" {
            debug!("Warning: File does not have .svg extension: {}", path.display());
        }
    }

    Ok(())
}
