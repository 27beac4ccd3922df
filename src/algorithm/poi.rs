//! Corridor-of-interest strategy: a free wander followed by a biased corridor

use crate::algorithm::corridor::carve_corridor;
use crate::io::configuration::GeneratorConfig;
use crate::spatial::grid::{GridMap, Position};
use crate::spatial::pathfinding::NEIGHBOR_OFFSETS;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Take `steps` unbiased 4-connected steps from `origin`, carving as it goes
///
/// Proposals that leave the grid use up the step without moving. Cells may be
/// revisited freely. Returns the final position.
pub fn random_walk<R: Rng>(
    grid: &mut GridMap,
    origin: Position,
    steps: usize,
    rng: &mut R,
) -> Position {
    let mut current = origin;
    for _ in 0..steps {
        let Some(&(dx, dy)) = NEIGHBOR_OFFSETS.choose(rng) else {
            break;
        };
        if let Some(next) = current.offset(dx, dy).filter(|&pos| grid.contains(pos)) {
            current = next;
            grid.carve(current);
        }
    }
    current
}

/// Generate a corridor dungeon from the top-left to the bottom-right corner
///
/// Connectivity holds by construction: the wander starts on the carved
/// start cell and the corridor ends on the end cell.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GridMap {
    let mut grid = GridMap::new(config.grid_width, config.grid_height);
    let start = Position::new(0, 0);
    let end = Position::new(
        config.grid_width.saturating_sub(1),
        config.grid_height.saturating_sub(1),
    );

    grid.carve(start);
    let waypoint = random_walk(&mut grid, start, config.min_path_length, rng);
    carve_corridor(&mut grid, waypoint, end, rng);

    grid.finalize(start, end);
    grid
}
