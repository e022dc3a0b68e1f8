//! # Wave Spectrum
//!
//! Ocean wave energy spectrum estimation from a vessel's heave accelerometer,
//! using a Response Amplitude Operator (RAO) characterized from calibration
//! measurements.
//!
//! ## Features
//!
//! - **Spectral core**: radix-2 decimation-in-time FFT over power-of-two
//!   zero-padded buffers, magnitude spectra and periodograms
//! - **RAO characterization**: heave / wave elevation power spectrum ratio
//! - **Wave spectrum estimation**: double integration of heave acceleration,
//!   heave power spectrum, division by the RAO
//! - **Measurement uncertainty**: pluggable uniform-distribution sampling of
//!   every raw measurement
//!
//! ## Quick Start
//!
//! ```no_run
//! use wave_spectrum::{estimate_from_files, EstimationConfig};
//!
//! let result = estimate_from_files(
//!     "testingHeave.csv",
//!     "testingWaveElevation.csv",
//!     "oceanHeaveAcceleration.csv",
//!     &EstimationConfig::default(),
//! )?;
//!
//! for bin in result.summary(9) {
//!     println!("{:.6} Hz, {:.6}", bin.frequency_hz, bin.density);
//! }
//! # Ok::<(), wave_spectrum::SpectrumError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline runs in two stages:
//!
//! ```text
//! Calibration heave + wave elevation → Uncertainty → Power spectra → RAO
//! At-sea heave acceleration → Uncertainty → Integration → Padding
//!     → Power spectrum → ÷ RAO
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod spectral;

// Re-export main types
pub use analysis::estimate::{estimate_wave_spectrum, estimate_wave_spectrum_from_file};
pub use analysis::metadata::EstimationMetadata;
pub use analysis::rao::{characterize_rao, characterize_rao_from_files};
pub use analysis::result::{SpectrumBin, WaveSpectrumEstimate};
pub use config::EstimationConfig;
pub use error::SpectrumError;
pub use io::sample_buffer::SampleBuffer;
pub use preprocessing::uncertainty::{ExactSampler, UncertaintySampler, UniformSampler};
pub use spectral::combine::{calculate_rao, calculate_wave_energy_spectrum, elementwise_divide};
pub use spectral::fft::transform;
pub use spectral::sizing::round_up_to_power_of_two;
pub use spectral::spectrum::{compute_power_spectrum, magnitude_spectrum, periodogram};
pub use spectral::{Rao, Spectrum};

use std::path::Path;

/// Run both pipeline stages from measurement files
///
/// Characterizes the vessel RAO from the calibration files, then estimates the
/// wave spectrum from the at-sea acceleration file. Uncertainty draws come from
/// a [`UniformSampler`] seeded with `config.seed` (or OS entropy).
///
/// # Arguments
///
/// * `heave_displacement_path` - Calibration heave displacement measurements
/// * `wave_elevation_path` - Calibration wave elevation measurements
/// * `heave_acceleration_path` - Heave acceleration measured at sea
/// * `config` - Estimation configuration parameters
///
/// # Errors
///
/// Returns `SpectrumError` if any file cannot be read or either stage fails.
pub fn estimate_from_files<P, Q, R>(
    heave_displacement_path: P,
    wave_elevation_path: Q,
    heave_acceleration_path: R,
    config: &EstimationConfig,
) -> Result<WaveSpectrumEstimate, SpectrumError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    config.validate()?;

    let mut sampler = UniformSampler::from_seed_option(config.seed);

    let rao = characterize_rao_from_files(
        heave_displacement_path,
        wave_elevation_path,
        config,
        &mut sampler,
    )?;
    log::debug!("Characterized RAO with {} bins", rao.len());

    estimate_wave_spectrum_from_file(heave_acceleration_path, &rao, config, &mut sampler)
}
