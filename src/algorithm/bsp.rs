//! Binary space partition rooms joined by L-shaped corridors

use crate::io::configuration::GeneratorConfig;
use crate::spatial::grid::{GridMap, Position};
use rand::Rng;

/// Rectangular region awaiting partition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

/// Axis-aligned room carved inside a leaf region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Room {
    /// Shrink a leaf region by one cell per side
    ///
    /// The room never drops below 2x2, and is shifted back inside the grid
    /// when that minimum would push it past the far edge.
    fn inset(region: Region, grid_width: usize, grid_height: usize) -> Self {
        let width = region.width.saturating_sub(2).max(2).min(grid_width);
        let height = region.height.saturating_sub(2).max(2).min(grid_height);
        Self {
            x: (region.x + 1).min(grid_width - width),
            y: (region.y + 1).min(grid_height - height),
            width,
            height,
        }
    }

    /// Center cell, rounding toward the bottom-right
    pub const fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Every cell covered by the room, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| Position::new(x, y)))
    }
}

/// Recursively split the grid into leaf rooms, returned in pre-order
///
/// A region becomes a room once both sides are below `2 * min_size`;
/// otherwise its longer side (height on ties) is cut at a random offset in
/// `[min_size, length - min_size]`. The explicit stack visits the first half
/// before the second, matching the draw order of plain recursion.
pub fn partition<R: Rng>(
    width: usize,
    height: usize,
    min_size: usize,
    rng: &mut R,
) -> Vec<Room> {
    let min_size = min_size.max(1);
    let split_limit = min_size.saturating_mul(2);
    let mut rooms = Vec::new();
    let mut pending = vec![Region {
        x: 0,
        y: 0,
        width,
        height,
    }];

    while let Some(region) = pending.pop() {
        if region.width < split_limit && region.height < split_limit {
            rooms.push(Room::inset(region, width, height));
            continue;
        }

        let (first, second) = if region.width > region.height {
            let offset = rng.random_range(min_size..=region.width - min_size);
            (
                Region {
                    width: offset,
                    ..region
                },
                Region {
                    x: region.x + offset,
                    width: region.width - offset,
                    ..region
                },
            )
        } else {
            let offset = rng.random_range(min_size..=region.height - min_size);
            (
                Region {
                    height: offset,
                    ..region
                },
                Region {
                    y: region.y + offset,
                    height: region.height - offset,
                    ..region
                },
            )
        };

        pending.push(second);
        pending.push(first);
    }

    rooms
}

/// Carve a corridor moving horizontally first, then vertically
pub fn carve_l_corridor(grid: &mut GridMap, from: Position, to: Position) {
    let mut cursor = from;
    while cursor.x != to.x {
        cursor.x = if cursor.x < to.x {
            cursor.x + 1
        } else {
            cursor.x - 1
        };
        grid.carve(cursor);
    }
    while cursor.y != to.y {
        cursor.y = if cursor.y < to.y {
            cursor.y + 1
        } else {
            cursor.y - 1
        };
        grid.carve(cursor);
    }
}

/// Generate partitioned rooms chained in pre-order
///
/// Start and end are the centers of the first and last rooms. Should the
/// partition yield nothing, the corners become the endpoints and the path
/// stays empty.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GridMap {
    let mut grid = GridMap::new(config.grid_width, config.grid_height);
    let rooms = partition(
        config.grid_width,
        config.grid_height,
        config.bsp_min_size,
        rng,
    );

    for room in &rooms {
        for cell in room.cells() {
            grid.carve(cell);
        }
    }

    for pair in rooms.windows(2) {
        if let [previous, next] = pair {
            carve_l_corridor(&mut grid, previous.center(), next.center());
        }
    }

    match (rooms.first(), rooms.last()) {
        (Some(first), Some(last)) => grid.finalize(first.center(), last.center()),
        _ => grid.finalize(
            Position::new(0, 0),
            Position::new(
                config.grid_width.saturating_sub(1),
                config.grid_height.saturating_sub(1),
            ),
        ),
    }
    grid
}
