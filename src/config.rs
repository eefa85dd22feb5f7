//! Visualizer configuration.
//!
//! All values are fixed at build time through [`VisualizerConfig::default`];
//! there are no command-line flags.

use crate::sort::Height;
use thiserror::Error;

/// Number of bars in the array.
pub const DEFAULT_BAR_COUNT: usize = 80;
/// Smallest generated height.
pub const DEFAULT_MIN_HEIGHT: Height = 20;
/// Largest generated height (display height 550 minus a 60 unit margin).
pub const DEFAULT_MAX_HEIGHT: Height = 490;
/// Frames (and therefore steps) per second.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Configuration for a visualizer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Length of the array buffer for the lifetime of the process.
    pub bar_count: usize,
    /// Inclusive lower bound of generated heights.
    pub min_height: Height,
    /// Inclusive upper bound of generated heights.
    pub max_height: Height,
    /// Target frame rate; one step is taken per frame.
    pub target_fps: u32,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            bar_count: DEFAULT_BAR_COUNT,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            seed: None,
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The array would be empty.
    #[error("bar count must be at least 1")]
    NoBars,
    /// The height range is inverted.
    #[error("height range {min}..={max} is empty")]
    EmptyHeightRange {
        /// Configured minimum.
        min: Height,
        /// Configured maximum.
        max: Height,
    },
    /// Frames would never be produced.
    #[error("target fps must be at least 1")]
    ZeroFps,
}

impl VisualizerConfig {
    /// Check the configuration for values the session cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.bar_count == 0 {
            return Err(ConfigError::NoBars);
        }
        if self.min_height > self.max_height {
            return Err(ConfigError::EmptyHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    /// Builder: fix the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: change the bar count.
    #[must_use]
    pub const fn with_bar_count(mut self, bar_count: usize) -> Self {
        self.bar_count = bar_count;
        self
    }
}
