//! Run configuration with documented fields
//!
//! The tuning constants of the year step itself live next to the code
//! that uses them (see the `sim` submodules); this file only covers the
//! knobs a run of the simulator exposes to the operator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{Result, ThraxaError};

/// Slowest allowed tick rate multiplier
pub const MIN_SPEED: f64 = 0.5;

/// Fastest allowed tick rate multiplier
pub const MAX_SPEED: f64 = 3.0;

/// Granularity of the speed control
pub const SPEED_STEP: f64 = 0.5;

/// Configuration for a simulation run
///
/// Loadable from a TOML file so scripted runs are reproducible without
/// retyping CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for the deterministic random source
    ///
    /// Two runs with the same seed and the same starting world produce
    /// identical histories.
    pub seed: u64,

    /// Number of simulated years for a batch run
    pub years: u32,

    /// Tick rate multiplier in [0.5, 3.0]
    ///
    /// The interactive runner paces one step per 1000/speed
    /// milliseconds. Batch runs ignore pacing entirely.
    pub speed: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            years: 100,
            speed: 1.0,
        }
    }
}

impl RunConfig {
    /// Load a run configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ThraxaError::InvalidConfig(format!(
                "speed ({}) must be within [{}, {}]",
                self.speed, MIN_SPEED, MAX_SPEED
            )));
        }

        if self.years == 0 {
            return Err(ThraxaError::InvalidConfig(
                "years must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
