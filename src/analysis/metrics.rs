//! Summary statistics of a finished dungeon

use crate::spatial::grid::GridMap;
use crate::spatial::pathfinding::reachable_count;
use serde::Serialize;
use std::fmt;

/// Read-only measurements taken from a finalized map
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DungeonMetrics {
    /// Total number of cells
    pub cell_count: usize,
    /// Number of floor cells
    pub floor_cells: usize,
    /// Fraction of cells that are floor
    pub floor_ratio: f64,
    /// Floor cells connected to the start cell, including it
    pub reachable_floor: usize,
    /// Number of cells on the shortest start-to-end path
    pub path_length: usize,
}

impl DungeonMetrics {
    /// Measure a map
    pub fn measure(grid: &GridMap) -> Self {
        let cell_count = grid.width() * grid.height();
        let floor_cells = grid.floor_count();
        let floor_ratio = if cell_count == 0 {
            0.0
        } else {
            floor_cells as f64 / cell_count as f64
        };
        let reachable_floor = grid
            .start()
            .map_or(0, |start| reachable_count(grid, start));

        Self {
            cell_count,
            floor_cells,
            floor_ratio,
            reachable_floor,
            path_length: grid.path().len(),
        }
    }

    /// Whether start and end are joined by a route
    pub const fn is_connected(&self) -> bool {
        self.path_length > 0
    }

    /// Floor cells cut off from the start
    pub const fn isolated_floor(&self) -> usize {
        self.floor_cells.saturating_sub(self.reachable_floor)
    }
}

impl fmt::Display for DungeonMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} floor cells ({:.1}%), {} reachable, path length {}",
            self.floor_cells,
            self.floor_ratio * 100.0,
            self.reachable_floor,
            self.path_length
        )
    }
}
