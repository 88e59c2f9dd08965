//! Configuration types for board rendering and animation timing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest board the lowercase coordinate alphabet can address.
pub const MAX_BOARD_SIZE: usize = 26;

fn default_use_record_size() -> bool {
    true
}

/// Top-level render configuration.
///
/// Passed by reference into every renderer; nothing in the crate keeps
/// process-wide drawing state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Number of grid lines in each direction.
    pub board_size: usize,
    /// Stone diameter in pixels (also the grid spacing).
    pub stone_diameter: usize,
    /// Display time of each frame in hundredths of a second.
    pub frame_delay: u16,
    /// Colors for the three palette indices.
    #[serde(default)]
    pub palette: Palette,
    /// What to do with moves that land outside the board.
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
    /// Take the board size from the record's `SZ` property when present.
    #[serde(default = "default_use_record_size")]
    pub use_record_size: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            board_size: 19,
            stone_diameter: 40,
            frame_delay: 100,
            palette: Palette::default(),
            out_of_range: OutOfRangePolicy::default(),
            use_record_size: true,
        }
    }
}

/// RGB colors backing the background, black and white palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Board wood.
    pub background: [u8; 3],
    pub black: [u8; 3],
    pub white: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0xE6, 0xBF, 0x83],
            black: [0x00, 0x00, 0x00],
            white: [0xFF, 0xFF, 0xFF],
        }
    }
}

impl Palette {
    /// Flat RGB table in palette-index order, as GIF color tables expect.
    pub fn to_rgb_table(&self) -> [u8; 9] {
        let [br, bg, bb] = self.background;
        let [kr, kg, kb] = self.black;
        let [wr, wg, wb] = self.white;
        [br, bg, bb, kr, kg, kb, wr, wg, wb]
    }
}

/// Handling of decoded coordinates that fall outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Abort the run with an error.
    #[default]
    Reject,
    /// Drop the move with a warning; it produces no frame.
    Skip,
}

impl RenderConfig {
    /// Side length of a frame in pixels.
    #[inline]
    pub fn side(&self) -> usize {
        self.board_size * self.stone_diameter + 2
    }

    /// Stone radius in pixels.
    #[inline]
    pub fn stone_radius(&self) -> usize {
        self.stone_diameter / 2
    }

    /// Pixel coordinate of grid line `i` on either axis.
    #[inline]
    pub fn grid_pixel(&self, i: usize) -> usize {
        i * self.stone_diameter + self.stone_diameter / 2
    }

    /// Same configuration with a different board size.
    pub fn with_board_size(&self, board_size: usize) -> Self {
        Self {
            board_size,
            ..self.clone()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.stone_diameter < 2 {
            return Err(ConfigError::InvalidStoneDiameter(self.stone_diameter));
        }
        if self.side() > u16::MAX as usize {
            return Err(ConfigError::FrameTooLarge(self.side()));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size must be between 1 and 26, got {0}")]
    InvalidBoardSize(usize),
    #[error("Stone diameter must be at least 2 pixels, got {0}")]
    InvalidStoneDiameter(usize),
    #[error("Frame side of {0} pixels exceeds the GIF limit of 65535")]
    FrameTooLarge(usize),
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse config: {0}")]
    Json(#[from] serde_json::Error),
}
