//! Double integration of heave acceleration to displacement
//!
//! # Algorithm
//!
//! Trapezoidal integration, twice, starting from rest:
//!
//! ```text
//! v[i] = v[i-1] + (a[i] + a[i-1]) · dt / 2
//! x[i] = x[i-1] + (v[i] + v[i-1]) · dt / 2
//! ```
//!
//! with `a[-1] = v[-1] = x[-1] = 0`. The displacement replaces the
//! acceleration in place and the mean is removed afterwards.

use super::normalization::subtract_mean;
use crate::error::SpectrumError;

/// Kinematic state carried between integration steps
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct State {
    position: f32,
    speed: f32,
}

impl State {
    fn step(self, acceleration: f32, previous_acceleration: f32, dt: f32) -> Self {
        let speed = self.speed + 0.5 * (acceleration + previous_acceleration) * dt;
        let position = self.position + 0.5 * (speed + self.speed) * dt;
        Self { position, speed }
    }
}

/// Convert acceleration samples to zero-mean displacement, in place
///
/// # Arguments
///
/// * `samples` - Heave acceleration in time order; overwritten with displacement
/// * `dt` - Time between successive samples in seconds
///
/// # Errors
///
/// Returns `SpectrumError::InvalidInput` if `dt` is not a finite, positive number.
pub fn integrate_displacement(samples: &mut [f32], dt: f32) -> Result<(), SpectrumError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SpectrumError::InvalidInput(format!(
            "Invalid timestep: {}",
            dt
        )));
    }

    log::debug!("Integrating {} acceleration samples, dt={}", samples.len(), dt);

    let mut state = State::default();
    let mut previous_acceleration = 0.0f32;

    for sample in samples.iter_mut() {
        let acceleration = *sample;
        state = state.step(acceleration, previous_acceleration, dt);
        previous_acceleration = acceleration;
        *sample = state.position;
    }

    subtract_mean(samples);
    Ok(())
}
