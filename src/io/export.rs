//! Map snapshots as PNG, ASCII text or JSON

use crate::algorithm::strategy::Strategy;
use crate::analysis::metrics::DungeonMetrics;
use crate::io::error::{Result, file_system_error};
use crate::io::image::export_grid_as_png;
use crate::spatial::grid::{GridMap, Position};
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// File format written for each generated map
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scaled PNG image
    #[default]
    Png,
    /// Plain text map, one character per cell
    Ascii,
    /// JSON document with rows, endpoints, path and metrics
    Json,
}

impl OutputFormat {
    /// File extension for this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ascii => "txt",
            Self::Json => "json",
        }
    }
}

/// Serializable view of a finished map
#[derive(Debug, Serialize)]
pub struct MapDocument {
    /// Strategy that produced the map
    pub strategy: String,
    /// Seed the RNG was initialized with
    pub seed: u64,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Start cell
    pub start: Option<Position>,
    /// End cell
    pub end: Option<Position>,
    /// Shortest start-to-end route
    pub path: Vec<Position>,
    /// Cell rows top to bottom, `#` for wall and `.` for floor
    pub rows: Vec<String>,
    /// Summary statistics
    pub metrics: DungeonMetrics,
}

impl MapDocument {
    /// Capture a map together with how it was generated
    pub fn new(grid: &GridMap, strategy: Strategy, seed: u64) -> Self {
        let rows: Vec<String> = grid
            .cells()
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_floor() { '.' } else { '#' })
                    .collect::<String>()
            })
            .collect();

        Self {
            strategy: strategy.name().to_string(),
            seed,
            width: grid.width(),
            height: grid.height(),
            start: grid.start(),
            end: grid.end(),
            path: grid.path().to_vec(),
            rows,
            metrics: DungeonMetrics::measure(grid),
        }
    }
}

/// Serialize a map as pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails
pub fn to_json(grid: &GridMap, strategy: Strategy, seed: u64) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MapDocument::new(grid, strategy, seed))?)
}

/// Write a map to `output_path` in the requested format
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written
pub fn write_map(
    grid: &GridMap,
    strategy: Strategy,
    seed: u64,
    format: OutputFormat,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let text = match format {
        OutputFormat::Png => return export_grid_as_png(grid, cell_size, output_path),
        OutputFormat::Ascii => grid.to_string(),
        OutputFormat::Json => to_json(grid, strategy, seed)?,
    };

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    std::fs::write(output_path, text).map_err(|e| file_system_error(output_path, "write", e))
}
