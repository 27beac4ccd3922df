//! Breadth-first search over floor cells
//!
//! Neighbors are always enumerated East, West, South, North so that the
//! returned route and the discovery order are deterministic for a layout.

use crate::spatial::grid::{GridMap, Position};
use bitvec::prelude::*;
use std::collections::VecDeque;

/// 4-connected step offsets in enumeration order: East, West, South, North
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// In-bounds floor neighbors of a position, in `NEIGHBOR_OFFSETS` order
pub fn floor_neighbors(grid: &GridMap, pos: Position) -> impl Iterator<Item = Position> + '_ {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| pos.offset(dx, dy))
        .filter(|&next| grid.is_floor(next))
}

/// Visit bookkeeping shared by both searches
struct Frontier {
    visited: BitVec,
    queue: VecDeque<Position>,
}

impl Frontier {
    fn new(grid: &GridMap, start: Position) -> Self {
        let mut frontier = Self {
            visited: bitvec![0; grid.width() * grid.height()],
            queue: VecDeque::new(),
        };
        frontier.discover(grid, start);
        frontier
    }

    /// Mark a cell visited and enqueue it; returns false if already seen
    fn discover(&mut self, grid: &GridMap, pos: Position) -> bool {
        let Some(index) = grid.linear_index(pos) else {
            return false;
        };
        if self.visited.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.visited.set(index, true);
        self.queue.push_back(pos);
        true
    }

    fn is_visited(&self, grid: &GridMap, pos: Position) -> bool {
        grid.linear_index(pos)
            .and_then(|index| self.visited.get(index).as_deref().copied())
            .unwrap_or(false)
    }
}

/// Shortest 4-connected route from `start` to `end`, both inclusive
///
/// Returns an empty path when either endpoint is not an in-bounds floor cell
/// or when `end` cannot be reached. `start == end` yields a single cell.
pub fn find_shortest_path(grid: &GridMap, start: Position, end: Position) -> Vec<Position> {
    if !grid.is_floor(start) || !grid.is_floor(end) {
        return Vec::new();
    }

    let mut came_from: Vec<Option<Position>> = vec![None; grid.width() * grid.height()];
    let mut frontier = Frontier::new(grid, start);

    while let Some(current) = frontier.queue.pop_front() {
        if current == end {
            break;
        }
        for next in floor_neighbors(grid, current) {
            if frontier.discover(grid, next) {
                if let Some(slot) = grid
                    .linear_index(next)
                    .and_then(|index| came_from.get_mut(index))
                {
                    *slot = Some(current);
                }
            }
        }
    }

    if !frontier.is_visited(grid, end) {
        return Vec::new();
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(previous) = grid
        .linear_index(current)
        .and_then(|index| came_from.get(index).copied().flatten())
    {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Every floor cell reachable from `start` with its BFS distance
///
/// Entries appear in discovery order, beginning with `(start, 0)`. Empty when
/// `start` is not an in-bounds floor cell.
pub fn breadth_first_distances(grid: &GridMap, start: Position) -> Vec<(Position, usize)> {
    if !grid.is_floor(start) {
        return Vec::new();
    }

    let mut distances = vec![(start, 0)];
    let mut depth: Vec<usize> = vec![0; grid.width() * grid.height()];
    let mut frontier = Frontier::new(grid, start);

    while let Some(current) = frontier.queue.pop_front() {
        let current_depth = grid
            .linear_index(current)
            .and_then(|index| depth.get(index).copied())
            .unwrap_or(0);
        for next in floor_neighbors(grid, current) {
            if frontier.discover(grid, next) {
                if let Some(slot) = grid
                    .linear_index(next)
                    .and_then(|index| depth.get_mut(index))
                {
                    *slot = current_depth + 1;
                }
                distances.push((next, current_depth + 1));
            }
        }
    }

    distances
}

/// Number of floor cells reachable from `start`, including `start`
pub fn reachable_count(grid: &GridMap, start: Position) -> usize {
    breadth_first_distances(grid, start).len()
}
