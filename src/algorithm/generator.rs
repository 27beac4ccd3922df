//! Generation entry point: strategy selection, validation and seeding

use crate::algorithm::strategy::Strategy;
use crate::io::configuration::GeneratorConfig;
use crate::io::error::Result;
use crate::spatial::grid::GridMap;
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Generate a dungeon by strategy name
///
/// The same name, configuration and seed always produce an identical map.
///
/// # Errors
///
/// Returns an error if:
/// - `strategy_name` is not one of `poi`, `maze`, `noise`, `bsp`
/// - The configuration fails validation
pub fn generate(strategy_name: &str, config: &GeneratorConfig, seed: u64) -> Result<GridMap> {
    let strategy = strategy_name.parse::<Strategy>()?;
    generate_with(strategy, config, seed)
}

/// Generate a dungeon with an already-selected strategy
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration fails validation; no grid
/// is allocated in that case.
pub fn generate_with(strategy: Strategy, config: &GeneratorConfig, seed: u64) -> Result<GridMap> {
    config.validate()?;
    Ok(run(strategy, config, seed))
}

/// Generate one dungeon per seed in parallel
///
/// Each worker owns its RNG and grid, so every map equals the one a
/// sequential `generate_with` call would return. Output follows `seeds`.
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration fails validation
pub fn generate_batch(
    strategy: Strategy,
    config: &GeneratorConfig,
    seeds: &[u64],
) -> Result<Vec<GridMap>> {
    config.validate()?;
    Ok(seeds
        .par_iter()
        .map(|&seed| run(strategy, config, seed))
        .collect())
}

fn run(strategy: Strategy, config: &GeneratorConfig, seed: u64) -> GridMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = strategy.generate(config, &mut rng);
    log::debug!(
        "{strategy} seed {seed}: {}x{} grid, {} floor cells, path length {}",
        grid.width(),
        grid.height(),
        grid.floor_count(),
        grid.path().len()
    );
    grid
}
