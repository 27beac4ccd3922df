//! Procedural grid dungeon generation with four layout strategies
//!
//! Each strategy is a pure function of a configuration and a seeded RNG that
//! returns a finished `GridMap`: wall/floor cells plus a start, an end and
//! the breadth-first shortest path between them.

#![forbid(unsafe_code)]

/// Layout strategies, corridor carving and the generation entry point
pub mod algorithm;
/// Measurements of finished maps
pub mod analysis;
/// Configuration, errors, command-line interface and export
pub mod io;
/// Grid model and pathfinding
pub mod spatial;

pub use algorithm::generator::{generate, generate_batch, generate_with};
pub use algorithm::strategy::Strategy;
pub use io::configuration::GeneratorConfig;
pub use io::error::{DungeonError, Result};
pub use spatial::{Cell, GridMap, Position};
