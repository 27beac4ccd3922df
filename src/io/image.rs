//! PNG export of finished maps with the standard dungeon palette

use crate::io::configuration::{END_COLOR, FLOOR_COLOR, PATH_COLOR, START_COLOR, WALL_COLOR};
use crate::io::error::{DungeonError, Result, file_system_error, invalid_parameter};
use crate::spatial::grid::{GridMap, Position};
use image::{ImageBuffer, Rgb, RgbImage};
use std::collections::HashSet;
use std::path::Path;

/// Color of a single cell, with start and end drawn above the path
fn cell_color(grid: &GridMap, on_path: &HashSet<Position>, pos: Position) -> [u8; 3] {
    if Some(pos) == grid.start() {
        START_COLOR
    } else if Some(pos) == grid.end() {
        END_COLOR
    } else if on_path.contains(&pos) {
        PATH_COLOR
    } else if grid.is_floor(pos) {
        FLOOR_COLOR
    } else {
        WALL_COLOR
    }
}

/// Draw the map with every cell as a `cell_size` pixel square
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero or the image would not
/// fit in `u32` pixel dimensions
pub fn render_grid(grid: &GridMap, cell_size: u32) -> Result<RgbImage> {
    if cell_size == 0 {
        return Err(invalid_parameter("cell_size", &cell_size, &"must be positive"));
    }

    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .ok_or_else(|| {
                invalid_parameter("cell_size", &cell_size, &"image dimensions overflow")
            })
    };
    let width = scaled(grid.width())?;
    let height = scaled(grid.height())?;

    let on_path: HashSet<Position> = grid.path().iter().copied().collect();

    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        let pos = Position::new((px / cell_size) as usize, (py / cell_size) as usize);
        Rgb(cell_color(grid, &on_path, pos))
    }))
}

/// Render the map and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see `render_grid`)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &GridMap, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| DungeonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
