//! Command-line interface for batch generation and export of dungeon maps

use crate::algorithm::generator::generate_with;
use crate::algorithm::strategy::Strategy;
use crate::analysis::metrics::DungeonMetrics;
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, Settings};
use crate::io::error::Result;
use crate::io::export::{OutputFormat, write_map};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "dungeon-forge")]
#[command(
    author,
    version,
    about = "Generate grid dungeons with corridor, maze, noise and BSP strategies"
)]
/// Command-line arguments for the dungeon generation tool
pub struct Cli {
    /// Strategies to run (all four when omitted)
    #[arg(value_enum, value_name = "STRATEGY")]
    pub strategies: Vec<Strategy>,

    /// JSON settings file with grid and render parameters
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Grid width in cells (overrides the settings file)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Grid height in cells (overrides the settings file)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Unbiased walk steps for the POI strategy
    #[arg(long)]
    pub min_path_length: Option<usize>,

    /// Probability that a noise cell starts as wall, in [0, 1)
    #[arg(long)]
    pub noise_threshold: Option<f64>,

    /// Minimum BSP half-dimension before a region becomes a room
    #[arg(long)]
    pub bsp_min_size: Option<usize>,

    /// Pixel size of one cell in PNG output
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Random seed of the first map
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maps per strategy, using consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: u64,

    /// Directory receiving the generated maps
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Output file format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Regenerate maps even if the output file exists
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Requested strategies in first-mention order, or all of them
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            return Strategy::ALL.to_vec();
        }
        let mut selected = Vec::with_capacity(self.strategies.len());
        for &strategy in &self.strategies {
            if !selected.contains(&strategy) {
                selected.push(strategy);
            }
        }
        selected
    }

    /// Consecutive seeds starting at `seed`
    pub fn seeds(&self) -> Vec<u64> {
        (0..self.count).map(|i| self.seed.wrapping_add(i)).collect()
    }

    /// Settings from the optional file with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let generator = &mut settings.generator;
        if let Some(width) = self.width {
            generator.grid_width = width;
        }
        if let Some(height) = self.height {
            generator.grid_height = height;
        }
        if let Some(steps) = self.min_path_length {
            generator.min_path_length = steps;
        }
        if let Some(threshold) = self.noise_threshold {
            generator.noise_threshold = threshold;
        }
        if let Some(min_size) = self.bsp_min_size {
            generator.bsp_min_size = min_size;
        }
        if let Some(cell_size) = self.cell_size {
            settings.render.cell_size = cell_size;
        }

        Ok(settings)
    }

    /// Output file for one strategy and seed
    pub fn output_path(&self, strategy: Strategy, seed: u64) -> PathBuf {
        self.output
            .join(format!("{strategy}_{seed}.{}", self.format.extension()))
    }
}

/// Orchestrates generation and export of every requested map
pub struct DungeonProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl DungeonProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export maps according to CLI arguments
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns an error if settings are invalid or any map cannot be written
    pub fn process(&mut self) -> Result<usize> {
        let settings = self.cli.settings()?;
        settings.generator.validate()?;

        let strategies = self.cli.selected_strategies();
        let seeds = self.cli.seeds();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(&strategies, seeds.len() as u64);
        }

        let mut written = 0;
        for &strategy in &strategies {
            written += self.process_strategy(strategy, &settings, &seeds)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!("Wrote {written} map(s) to {}", self.cli.output.display());
        Ok(written)
    }

    fn process_strategy(
        &self,
        strategy: Strategy,
        settings: &Settings,
        seeds: &[u64],
    ) -> Result<usize> {
        let start_time = Instant::now();

        let outcomes = seeds
            .par_iter()
            .map(|&seed| self.process_seed(strategy, settings, seed))
            .collect::<Result<Vec<bool>>>()?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete(strategy);
        }

        let written = outcomes.iter().filter(|&&was_written| was_written).count();
        log::info!(
            "{}: {written} of {} map(s) generated in {:.2?}",
            strategy.label(),
            seeds.len(),
            start_time.elapsed()
        );
        Ok(written)
    }

    fn process_seed(&self, strategy: Strategy, settings: &Settings, seed: u64) -> Result<bool> {
        let output_path = self.cli.output_path(strategy, seed);

        if self.cli.skip_existing() && output_path.exists() {
            log::info!("Skipping: {} (output exists)", output_path.display());
            self.advance(strategy);
            return Ok(false);
        }

        let grid = generate_with(strategy, &settings.generator, seed)?;
        let metrics = DungeonMetrics::measure(&grid);
        if !metrics.is_connected() {
            log::warn!("{strategy} seed {seed}: end is unreachable from start");
        }
        if metrics.isolated_floor() > 0 {
            log::debug!(
                "{strategy} seed {seed}: {} floor cells unreachable from start",
                metrics.isolated_floor()
            );
        }
        log::debug!("{strategy} seed {seed}: {metrics}");

        write_map(
            &grid,
            strategy,
            seed,
            self.cli.format,
            settings.render.cell_size,
            &output_path,
        )?;

        self.advance(strategy);
        Ok(true)
    }

    fn advance(&self, strategy: Strategy) {
        if let Some(ref pm) = self.progress_manager {
            pm.advance(strategy);
        }
    }
}
