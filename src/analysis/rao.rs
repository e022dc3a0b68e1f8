//! Vessel RAO characterization
//!
//! Calibration runs record heave displacement of the vessel alongside the
//! wave elevation that excited it, sampled at the same instants. The RAO is
//! the per-bin ratio of their power spectra.
//!
//! # Example
//!
//! ```
//! use wave_spectrum::analysis::rao::characterize_rao;
//! use wave_spectrum::io::sample_buffer::SampleBuffer;
//! use wave_spectrum::preprocessing::uncertainty::ExactSampler;
//! use wave_spectrum::EstimationConfig;
//!
//! let heave: SampleBuffer = (0..8).map(|i| (i as f32).sin()).collect();
//! let wave: SampleBuffer = (0..8).map(|i| (i as f32).sin() * 0.5).collect();
//! let rao = characterize_rao(heave, wave, &EstimationConfig::default(), &mut ExactSampler)?;
//! assert_eq!(rao.len(), 8);
//! # Ok::<(), wave_spectrum::SpectrumError>(())
//! ```

use crate::config::EstimationConfig;
use crate::error::SpectrumError;
use crate::io::csv_reader::read_samples;
use crate::io::sample_buffer::SampleBuffer;
use crate::preprocessing::uncertainty::{apply_uncertainty, UncertaintySampler};
use crate::spectral::combine::calculate_rao;
use crate::spectral::spectrum::compute_power_spectrum;
use crate::spectral::Rao;
use std::path::Path;

/// Characterize a vessel RAO from calibration measurements
///
/// # Arguments
///
/// * `heave_displacement` - Vessel heave displacement during calibration
/// * `wave_elevation` - Wave elevation recorded at the same instants
/// * `config` - Uncertainty widths for both series
/// * `sampler` - Source of uniform draws for uncertainty injection
///
/// # Returns
///
/// RAO with one ratio per frequency bin, of length `next_power_of_two(N)`
///
/// # Errors
///
/// Returns `SpectrumError` if:
/// - Either series is empty, or the config is invalid
/// - The series differ in length (`LengthMismatch`)
/// - The padded spectrum cannot be sized or allocated
pub fn characterize_rao<S: UncertaintySampler + ?Sized>(
    mut heave_displacement: SampleBuffer,
    mut wave_elevation: SampleBuffer,
    config: &EstimationConfig,
    sampler: &mut S,
) -> Result<Rao, SpectrumError> {
    config.validate()?;

    if heave_displacement.is_empty() || wave_elevation.is_empty() {
        return Err(SpectrumError::InvalidInput(
            "Calibration measurements are empty".to_string(),
        ));
    }

    if heave_displacement.len() != wave_elevation.len() {
        log::warn!(
            "Calibration series differ in length: {} heave samples, {} wave elevation samples",
            heave_displacement.len(),
            wave_elevation.len()
        );
        return Err(SpectrumError::LengthMismatch {
            expected: heave_displacement.len(),
            actual: wave_elevation.len(),
        });
    }

    log::debug!(
        "Characterizing RAO from {} calibration samples",
        heave_displacement.len()
    );

    apply_uncertainty(
        &mut heave_displacement,
        config.heave_measurement_uncertainty,
        sampler,
    )?;
    apply_uncertainty(
        &mut wave_elevation,
        config.wave_elevation_uncertainty,
        sampler,
    )?;

    let heave_spectrum = compute_power_spectrum(&heave_displacement)?;
    heave_displacement.release();

    let wave_spectrum = compute_power_spectrum(&wave_elevation)?;
    wave_elevation.release();

    calculate_rao(&heave_spectrum, &wave_spectrum)
}

/// Read calibration measurements from files and characterize the RAO
///
/// # Errors
///
/// Reader errors (`Io`, `Parse`, empty file) plus everything [`characterize_rao`] returns.
pub fn characterize_rao_from_files<P, Q, S>(
    heave_displacement_path: P,
    wave_elevation_path: Q,
    config: &EstimationConfig,
    sampler: &mut S,
) -> Result<Rao, SpectrumError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: UncertaintySampler + ?Sized,
{
    let heave_displacement = read_samples(heave_displacement_path)?;
    let wave_elevation = read_samples(wave_elevation_path)?;
    characterize_rao(heave_displacement, wave_elevation, config, sampler)
}
