//! Dungeon grid model with cell storage and generation metadata
//!
//! A `GridMap` is created fully walled by a strategy, carved during a single
//! generation pass, then finalized with start, end and the shortest path
//! between them. Cells are stored row-major as `[y, x]`.

use crate::spatial::pathfinding;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary cell state of the dungeon grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable cell
    #[default]
    Wall,
    /// Passable cell
    Floor,
}

impl Cell {
    /// Test whether the cell can be walked on
    pub const fn is_floor(self) -> bool {
        matches!(self, Self::Floor)
    }
}

/// Cell coordinate with `x` as column and `y` as row, origin top-left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Shift by a signed offset, returning `None` below zero
    ///
    /// Upper bounds are not checked here; callers test the result against
    /// the grid they carve into.
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Generated dungeon: wall/floor cells plus start, end and shortest path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    cells: Array2<Cell>,
    start: Option<Position>,
    end: Option<Position>,
    path: Vec<Position>,
}

impl GridMap {
    /// Create a fully walled grid
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_cells(Array2::from_elem((height, width), Cell::Wall))
    }

    /// Wrap an existing `[y, x]` cell array without endpoints
    pub const fn from_cells(cells: Array2<Cell>) -> Self {
        Self {
            cells,
            start: None,
            end: None,
            path: Vec::new(),
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Read-only view of the `[y, x]` cell array
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Test whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    /// Cell state at a position, `None` when out of bounds
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get([pos.y, pos.x]).copied()
    }

    /// Test whether a position is an in-bounds floor cell
    pub fn is_floor(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_floor)
    }

    /// Turn a cell into floor
    ///
    /// Out-of-bounds positions are ignored so callers can propose offsets
    /// before checking them.
    pub fn carve(&mut self, pos: Position) {
        self.set_cell(pos, Cell::Floor);
    }

    /// Overwrite a cell state, ignoring out-of-bounds positions
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self.cells.get_mut([pos.y, pos.x]) {
            *slot = cell;
        }
    }

    /// Number of floor cells
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_floor()).count()
    }

    /// Start cell, if generation has set one
    pub const fn start(&self) -> Option<Position> {
        self.start
    }

    /// End cell, if generation has set one
    pub const fn end(&self) -> Option<Position> {
        self.end
    }

    /// Shortest start-to-end route; empty when the end is unreachable
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Breadth-first shortest 4-connected route over floor cells
    pub fn find_shortest_path(&self, start: Position, end: Position) -> Vec<Position> {
        pathfinding::find_shortest_path(self, start, end)
    }

    /// Record the endpoints and store the shortest path between them
    pub fn finalize(&mut self, start: Position, end: Position) {
        self.path = self.find_shortest_path(start, end);
        self.start = Some(start);
        self.end = Some(end);
    }

    /// Row-major linear index used by flat per-cell buffers
    pub(crate) fn linear_index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.width() + pos.x)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_path: std::collections::HashSet<Position> = self.path.iter().copied().collect();

        for ((y, x), cell) in self.cells.indexed_iter() {
            let pos = Position::new(x, y);
            let glyph = if Some(pos) == self.start {
                'S'
            } else if Some(pos) == self.end {
                'E'
            } else if on_path.contains(&pos) {
                '*'
            } else if cell.is_floor() {
                '.'
            } else {
                '#'
            };
            write!(f, "{glyph}")?;
            if x + 1 == self.width() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
