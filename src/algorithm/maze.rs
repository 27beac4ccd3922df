//! Recursive-backtracker maze on the even-coordinate lattice
//!
//! Room cells sit on even coordinates and the odd cell between two rooms is
//! the connector joining them. Growth is a depth-first random walk with an
//! explicit stack, so the carved rooms form a spanning tree: exactly one
//! simple path between any two of them and no cycles.

use crate::io::configuration::GeneratorConfig;
use crate::spatial::grid::{GridMap, Position};
use crate::spatial::pathfinding::{NEIGHBOR_OFFSETS, breadth_first_distances};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a uniformly random even value in `[0, limit)`
fn random_even<R: Rng>(limit: usize, rng: &mut R) -> usize {
    let choices = limit.div_ceil(2).max(1);
    rng.random_range(0..choices) * 2
}

/// Lattice neighbors two cells away that are in bounds and still walled
fn unvisited_rooms(grid: &GridMap, pos: Position) -> Vec<Position> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(|(dx, dy)| pos.offset(dx * 2, dy * 2))
        .filter(|&next| grid.cell(next).is_some_and(|cell| !cell.is_floor()))
        .collect()
}

/// Grow a perfect maze from `origin` until every reachable room is carved
pub fn carve_maze<R: Rng>(grid: &mut GridMap, origin: Position, rng: &mut R) {
    grid.carve(origin);
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let candidates = unvisited_rooms(grid, current);
        if let Some(&next) = candidates.choose(rng) {
            let connector = Position::new((current.x + next.x) / 2, (current.y + next.y) / 2);
            grid.carve(connector);
            grid.carve(next);
            stack.push(next);
        } else {
            stack.pop();
        }
    }
}

/// Farthest floor cell from `start` by BFS distance
///
/// Ties go to the cell discovered first.
pub fn farthest_cell(grid: &GridMap, start: Position) -> Position {
    let mut farthest = start;
    let mut max_distance = 0;
    for (pos, distance) in breadth_first_distances(grid, start) {
        if distance > max_distance {
            max_distance = distance;
            farthest = pos;
        }
    }
    farthest
}

/// Generate a maze whose end is the cell farthest from a random start
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GridMap {
    let mut grid = GridMap::new(config.grid_width, config.grid_height);
    let start = Position::new(
        random_even(config.grid_width, rng),
        random_even(config.grid_height, rng),
    );

    carve_maze(&mut grid, start, rng);
    let end = farthest_cell(&grid, start);

    grid.finalize(start, end);
    grid
}
