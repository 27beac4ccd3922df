//! Generation strategies as one dispatchable sum type

use crate::algorithm::{bsp, maze, noise, poi};
use crate::io::configuration::GeneratorConfig;
use crate::io::error::DungeonError;
use crate::spatial::grid::GridMap;
use clap::ValueEnum;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Dungeon layout algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Strategy {
    /// Random wander then a goal-biased corridor between opposite corners
    Poi,
    /// Perfect maze grown by randomized depth-first backtracking
    Maze,
    /// Smoothed cellular-automaton caves with a forced corridor
    Noise,
    /// Binary space partition rooms chained by L-shaped corridors
    Bsp,
}

impl Strategy {
    /// Every strategy in presentation order
    pub const ALL: [Self; 4] = [Self::Poi, Self::Maze, Self::Noise, Self::Bsp];

    /// Short lowercase name used on the command line and in file names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poi => "poi",
            Self::Maze => "maze",
            Self::Noise => "noise",
            Self::Bsp => "bsp",
        }
    }

    /// Human-readable caption
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poi => "POI Corridor",
            Self::Maze => "Maze DFS",
            Self::Noise => "Noise-Based",
            Self::Bsp => "BSP Rooms",
        }
    }

    /// Run the strategy on a fresh grid
    ///
    /// The configuration is assumed valid; the facade checks it first.
    pub fn generate<R: Rng>(self, config: &GeneratorConfig, rng: &mut R) -> GridMap {
        match self {
            Self::Poi => poi::generate(config, rng),
            Self::Maze => maze::generate(config, rng),
            Self::Noise => noise::generate(config, rng),
            Self::Bsp => bsp::generate(config, rng),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DungeonError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DungeonError::UnknownStrategy {
                name: name.to_string(),
            })
    }
}
