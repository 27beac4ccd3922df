//! Generation constants, runtime configuration and settings validation

use crate::io::error::{DungeonError, Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Corridor carving
/// Chance per corridor step of adding all four neighbors as candidates
pub const LATERAL_VARIATION_PROBABILITY: f64 = 0.3;

// Cellular automaton smoothing
/// Number of smoothing passes applied to noise terrain
pub const SMOOTHING_PASSES: usize = 2;
/// Minimum floor cells in a 3x3 block for the center to become floor
pub const SMOOTHING_FLOOR_THRESHOLD: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum allowed number of cells, bounding per-cell search buffers
pub const MAX_GRID_CELLS: usize = 4_000_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 40;
/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 30;
/// Default number of unbiased walk steps for the POI strategy
pub const DEFAULT_MIN_PATH_LENGTH: usize = 20;
/// Default probability that a noise cell starts as wall
pub const DEFAULT_NOISE_THRESHOLD: f64 = 0.45;
/// Default minimum BSP half-dimension
pub const DEFAULT_BSP_MIN_SIZE: usize = 5;
/// Default edge length of a rendered cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 10;
/// Default render surface width in pixels
pub const DEFAULT_SCREEN_WIDTH: u32 = 820;
/// Default render surface height in pixels
pub const DEFAULT_SCREEN_HEIGHT: u32 = 620;

// Output settings
/// Default directory for exported maps
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default number of maps generated per strategy
pub const DEFAULT_COUNT: u64 = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Export palette
/// RGB color of floor cells
pub const FLOOR_COLOR: [u8; 3] = [200, 200, 200];
/// RGB color of wall cells
pub const WALL_COLOR: [u8; 3] = [50, 50, 50];
/// RGB color of cells on the shortest path
pub const PATH_COLOR: [u8; 3] = [255, 255, 0];
/// RGB color of the start cell
pub const START_COLOR: [u8; 3] = [0, 255, 0];
/// RGB color of the end cell
pub const END_COLOR: [u8; 3] = [255, 0, 0];

/// Parameters consumed by the generation strategies
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub grid_width: usize,
    /// Grid height in cells
    pub grid_height: usize,
    /// Unbiased random-walk steps taken by the POI strategy
    pub min_path_length: usize,
    /// Probability that a noise cell starts as wall, in `[0, 1)`
    pub noise_threshold: f64,
    /// Minimum half-dimension before a BSP partition becomes a room
    pub bsp_min_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            min_path_length: DEFAULT_MIN_PATH_LENGTH,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            bsp_min_size: DEFAULT_BSP_MIN_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the given dimensions and default tuning
    pub fn with_dimensions(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Self::default()
        }
    }

    /// Check every field against the generation contract
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - A grid dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - The grid holds more than `MAX_GRID_CELLS` cells
    /// - `noise_threshold` is not a finite value in `[0, 1)`
    /// - `bsp_min_size` is zero, which would keep BSP splitting forever
    pub fn validate(&self) -> Result<()> {
        validate_dimension("grid_width", self.grid_width)?;
        validate_dimension("grid_height", self.grid_height)?;

        let cells = self.grid_width * self.grid_height;
        if cells > MAX_GRID_CELLS {
            return Err(invalid_parameter(
                "grid_cells",
                &cells,
                &format!("width times height must not exceed {MAX_GRID_CELLS}"),
            ));
        }

        if !(0.0..1.0).contains(&self.noise_threshold) {
            return Err(invalid_parameter(
                "noise_threshold",
                &self.noise_threshold,
                &"must be a finite value in [0, 1)",
            ));
        }

        if self.bsp_min_size == 0 {
            return Err(invalid_parameter(
                "bsp_min_size",
                &self.bsp_min_size,
                &"must be at least 1",
            ));
        }

        Ok(())
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Parameters consumed only when drawing a finished map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Width of the render surface in pixels
    pub screen_width: u32,
    /// Height of the render surface in pixels
    pub screen_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Complete settings document as stored in a JSON settings file
///
/// Generation and render fields share one flat object; missing fields fall
/// back to the defaults above and unknown fields are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Generation parameters
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    /// Rendering parameters
    #[serde(flatten)]
    pub render: RenderConfig,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read and `ConfigParse` if
    /// it is not a valid settings object
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DungeonError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DungeonError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
