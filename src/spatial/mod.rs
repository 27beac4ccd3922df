//! Spatial data structures and grid search
//!
//! This module contains spatial-related functionality including:
//! - The dungeon grid model and cell coordinates
//! - Breadth-first pathfinding over floor cells

/// Grid model, cell states and coordinates
pub mod grid;
/// Shortest-path and distance search over floor cells
pub mod pathfinding;

pub use grid::{Cell, GridMap, Position};
