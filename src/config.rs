//! Configuration parameters for wave spectrum estimation

use crate::error::SpectrumError;
use serde::{Deserialize, Serialize};

/// Estimation configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    // Calibration (RAO characterization)
    /// Uncertainty width of the calibration heave displacement measurements (default: 0.1)
    pub heave_measurement_uncertainty: f32,

    /// Uncertainty width of the calibration wave elevation measurements (default: 0.1)
    pub wave_elevation_uncertainty: f32,

    // At-sea measurement
    /// Accelerometer resolution, used as the uncertainty width of heave acceleration (default: 0.1)
    pub accelerometer_resolution: f32,

    /// Time between successive measurements in seconds (default: 0.1)
    /// Used for integration and for the frequency axis of the result
    pub timestep: f32,

    // Output
    /// Maximum number of rows in a printed spectrum summary (default: 9)
    pub max_summary_lines: usize,

    /// Seed for the uncertainty sampler; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            heave_measurement_uncertainty: 0.1,
            wave_elevation_uncertainty: 0.1,
            accelerometer_resolution: 0.1,
            timestep: 0.1,
            max_summary_lines: 9,
            seed: None,
        }
    }
}

impl EstimationConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `SpectrumError::InvalidInput` naming the first bad parameter.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(SpectrumError::InvalidInput(format!(
                "Invalid timestep value: {}",
                self.timestep
            )));
        }

        let uncertainties = [
            ("heave measurement uncertainty", self.heave_measurement_uncertainty),
            ("wave elevation uncertainty", self.wave_elevation_uncertainty),
            ("accelerometer resolution", self.accelerometer_resolution),
        ];
        for (name, value) in uncertainties {
            if !value.is_finite() || value < 0.0 {
                return Err(SpectrumError::InvalidInput(format!(
                    "Invalid {}: {}",
                    name, value
                )));
            }
        }

        if self.max_summary_lines < 2 {
            return Err(SpectrumError::InvalidInput(format!(
                "Summary needs at least 2 lines, got {}",
                self.max_summary_lines
            )));
        }

        Ok(())
    }
}
