//! Goal-biased random corridor carving between two cells

use crate::io::configuration::LATERAL_VARIATION_PROBABILITY;
use crate::spatial::grid::{GridMap, Position};
use crate::spatial::pathfinding::NEIGHBOR_OFFSETS;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Candidate moves from `current` that strictly reduce the distance to `goal`
///
/// Ordered +x, -x, +y, -y.
pub fn distance_reducing_moves(current: Position, goal: Position) -> Vec<Position> {
    let mut moves = Vec::with_capacity(4);
    if current.x < goal.x {
        moves.push(Position::new(current.x + 1, current.y));
    }
    if let Some(west) = current.offset(-1, 0).filter(|_| current.x > goal.x) {
        moves.push(west);
    }
    if current.y < goal.y {
        moves.push(Position::new(current.x, current.y + 1));
    }
    if let Some(north) = current.offset(0, -1).filter(|_| current.y > goal.y) {
        moves.push(north);
    }
    moves
}

/// Carve a winding corridor from `from` to `to`
///
/// Every step may move toward the goal; with probability
/// `LATERAL_VARIATION_PROBABILITY` all four neighbors join the candidate set
/// as well, which lets the corridor drift sideways. A toward-goal move always
/// exists while the walk is unfinished, so the loop terminates. The starting
/// cell is not carved. Endpoints outside the grid make this a no-op.
pub fn carve_corridor<R: Rng>(grid: &mut GridMap, from: Position, to: Position, rng: &mut R) {
    if !grid.contains(from) || !grid.contains(to) {
        return;
    }

    let mut current = from;
    while current != to {
        let mut candidates = distance_reducing_moves(current, to);

        if rng.random::<f64>() < LATERAL_VARIATION_PROBABILITY {
            candidates.extend(
                NEIGHBOR_OFFSETS
                    .into_iter()
                    .filter_map(|(dx, dy)| current.offset(dx, dy)),
            );
        }

        candidates.retain(|&pos| grid.contains(pos));

        let Some(&next) = candidates.choose(rng) else {
            break;
        };
        current = next;
        grid.carve(current);
    }
}
