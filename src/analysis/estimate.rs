//! Wave energy spectrum estimation from at-sea heave acceleration
//!
//! # Algorithm
//!
//! 1. Inject accelerometer uncertainty into each raw sample
//! 2. Double-integrate acceleration to zero-mean displacement
//! 3. Zero-pad the displacement up to the RAO length when it is shorter
//! 4. Heave power spectrum of the padded displacement
//! 5. Check that the heave spectrum and RAO share a frequency axis
//! 6. `wave[i] = heave[i] / RAO[i]`

use super::metadata::EstimationMetadata;
use super::result::WaveSpectrumEstimate;
use crate::config::EstimationConfig;
use crate::error::SpectrumError;
use crate::io::csv_reader::read_samples;
use crate::io::sample_buffer::SampleBuffer;
use crate::preprocessing::integration::integrate_displacement;
use crate::preprocessing::uncertainty::{apply_uncertainty, UncertaintySampler};
use crate::spectral::combine::calculate_wave_energy_spectrum;
use crate::spectral::spectrum::compute_power_spectrum;
use std::path::Path;
use std::time::Instant;

/// Largest accepted acceleration series
const MAX_INPUT_SAMPLES: usize = usize::MAX / 2;

/// Estimate the ocean wave energy spectrum seen by a characterized vessel
///
/// # Arguments
///
/// * `heave_acceleration` - Heave acceleration measured at sea, in time order
/// * `rao` - Vessel RAO from [`characterize_rao`](super::rao::characterize_rao)
/// * `config` - Accelerometer resolution and timestep
/// * `sampler` - Source of uniform draws for uncertainty injection
///
/// # Returns
///
/// Wave energy spectrum with the same length and frequency axis as the RAO
///
/// # Errors
///
/// Returns `SpectrumError` if:
/// - The acceleration series or RAO is empty, or the config is invalid
/// - The series is too long to size a spectrum for (`SizingOverflow`)
/// - The heave spectrum length differs from the RAO length (`LengthMismatch`),
///   which happens when the series is longer than the RAO or the RAO length is
///   not a power of two
/// - A buffer cannot be allocated
pub fn estimate_wave_spectrum<S: UncertaintySampler + ?Sized>(
    mut heave_acceleration: SampleBuffer,
    rao: &[f32],
    config: &EstimationConfig,
    sampler: &mut S,
) -> Result<WaveSpectrumEstimate, SpectrumError> {
    let start_time = Instant::now();
    config.validate()?;

    let input_samples = heave_acceleration.len();
    if input_samples == 0 {
        return Err(SpectrumError::InvalidInput(
            "Heave acceleration measurements are empty".to_string(),
        ));
    }
    if rao.is_empty() {
        return Err(SpectrumError::InvalidInput("RAO is empty".to_string()));
    }
    if input_samples > MAX_INPUT_SAMPLES {
        return Err(SpectrumError::SizingOverflow {
            requested: input_samples,
        });
    }

    log::debug!(
        "Estimating wave spectrum: {} acceleration samples, RAO of {} bins, dt={}",
        input_samples,
        rao.len(),
        config.timestep
    );

    apply_uncertainty(
        &mut heave_acceleration,
        config.accelerometer_resolution,
        sampler,
    )?;
    integrate_displacement(&mut heave_acceleration, config.timestep)?;

    heave_acceleration.grow(rao.len())?;
    let heave_spectrum = compute_power_spectrum(&heave_acceleration)?;
    heave_acceleration.release();

    if heave_spectrum.len() != rao.len() {
        return Err(SpectrumError::LengthMismatch {
            expected: rao.len(),
            actual: heave_spectrum.len(),
        });
    }

    let spectrum = calculate_wave_energy_spectrum(&heave_spectrum, rao)?;
    let unbounded_bins = spectrum.iter().filter(|x| x.is_infinite()).count();
    if unbounded_bins > 0 {
        log::warn!(
            "{} of {} wave spectrum bins are unbounded (zero RAO)",
            unbounded_bins,
            spectrum.len()
        );
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!("Wave spectrum estimated in {:.2} ms", processing_time_ms);

    Ok(WaveSpectrumEstimate {
        timestep: config.timestep,
        metadata: EstimationMetadata {
            input_samples,
            spectrum_len: spectrum.len(),
            unbounded_bins,
            processing_time_ms,
            ..Default::default()
        },
        spectrum,
    })
}

/// Read heave acceleration from a file and estimate the wave spectrum
///
/// # Errors
///
/// Reader errors (`Io`, `Parse`, empty file) plus everything [`estimate_wave_spectrum`] returns.
pub fn estimate_wave_spectrum_from_file<P, S>(
    heave_acceleration_path: P,
    rao: &[f32],
    config: &EstimationConfig,
    sampler: &mut S,
) -> Result<WaveSpectrumEstimate, SpectrumError>
where
    P: AsRef<Path>,
    S: UncertaintySampler + ?Sized,
{
    let heave_acceleration = read_samples(heave_acceleration_path)?;
    estimate_wave_spectrum(heave_acceleration, rao, config, sampler)
}
