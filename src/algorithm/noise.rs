//! Cellular-automaton cave terrain with a guaranteed corner-to-corner corridor

use crate::algorithm::corridor::carve_corridor;
use crate::io::configuration::{GeneratorConfig, SMOOTHING_FLOOR_THRESHOLD, SMOOTHING_PASSES};
use crate::spatial::grid::{Cell, GridMap, Position};
use ndarray::Array2;
use rand::Rng;

/// Random initial terrain where each cell is wall with probability `threshold`
///
/// Cells are drawn row by row.
pub fn random_terrain<R: Rng>(
    width: usize,
    height: usize,
    threshold: f64,
    rng: &mut R,
) -> Array2<Cell> {
    Array2::from_shape_simple_fn((height, width), || {
        if rng.random::<f64>() > threshold {
            Cell::Floor
        } else {
            Cell::Wall
        }
    })
}

/// One Moore-neighborhood smoothing pass over interior cells
///
/// Reads only `cells` and returns a new array, so the update order inside a
/// pass cannot leak into the result. Border cells are copied unchanged.
pub fn smooth(cells: &Array2<Cell>) -> Array2<Cell> {
    let (rows, cols) = cells.dim();
    let mut next = cells.clone();
    if rows < 3 || cols < 3 {
        return next;
    }

    for y in 1..rows - 1 {
        for x in 1..cols - 1 {
            let floor_count = (y - 1..=y + 1)
                .flat_map(|ny| (x - 1..=x + 1).map(move |nx| [ny, nx]))
                .filter(|&index| cells.get(index).is_some_and(|cell| cell.is_floor()))
                .count();
            if let Some(slot) = next.get_mut([y, x]) {
                *slot = if floor_count >= SMOOTHING_FLOOR_THRESHOLD {
                    Cell::Floor
                } else {
                    Cell::Wall
                };
            }
        }
    }
    next
}

/// Generate smoothed noise terrain joined corner to corner by a corridor
///
/// The corridor is carved after smoothing, so start and end are connected
/// whatever the noise produced.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GridMap {
    let mut cells = random_terrain(
        config.grid_width,
        config.grid_height,
        config.noise_threshold,
        rng,
    );
    for _ in 0..SMOOTHING_PASSES {
        cells = smooth(&cells);
    }

    let mut grid = GridMap::from_cells(cells);
    let start = Position::new(0, 0);
    let end = Position::new(
        config.grid_width.saturating_sub(1),
        config.grid_height.saturating_sub(1),
    );

    grid.carve(start);
    carve_corridor(&mut grid, start, end, rng);

    grid.finalize(start, end);
    grid
}
