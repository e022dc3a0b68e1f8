//! Elementwise spectral combination: RAO and wave energy spectrum
//!
//! Both operations are a bin-by-bin division of equal-length, equally
//! frequency-indexed spectra. A zero denominator is not an error: the bin
//! becomes `+∞`, meaning the ratio is unbounded at that frequency.

use super::Spectrum;
use crate::error::SpectrumError;
use crate::io::sample_buffer::SampleBuffer;

/// Bin-by-bin `numerator[i] / denominator[i]`
///
/// Bins with a zero denominator are set to `f32::INFINITY`.
///
/// # Errors
///
/// Returns `SpectrumError::LengthMismatch` if the inputs differ in length.
/// Mismatched spectra must be grown to a common length by the caller first.
/// Returns `SpectrumError::AllocationFailure` if the output cannot be allocated.
pub fn elementwise_divide(
    numerator: &[f32],
    denominator: &[f32],
) -> Result<Spectrum, SpectrumError> {
    if numerator.len() != denominator.len() {
        return Err(SpectrumError::LengthMismatch {
            expected: denominator.len(),
            actual: numerator.len(),
        });
    }

    let mut quotient = SampleBuffer::zeroed(numerator.len())?;
    for ((out, &n), &d) in quotient.iter_mut().zip(numerator).zip(denominator) {
        *out = if d == 0.0 { f32::INFINITY } else { n / d };
    }
    Ok(quotient)
}

/// Response Amplitude Operator from calibration spectra
///
/// `RAO[i] = heave[i] / wave[i]`
///
/// # Errors
///
/// Returns `SpectrumError::LengthMismatch` if the spectra differ in length.
pub fn calculate_rao(
    heave_spectrum: &[f32],
    wave_spectrum: &[f32],
) -> Result<Spectrum, SpectrumError> {
    let rao = elementwise_divide(heave_spectrum, wave_spectrum)?;

    let unbounded = rao.iter().filter(|x| x.is_infinite()).count();
    if unbounded > 0 {
        log::warn!(
            "RAO has {} of {} bins with zero wave energy (set to infinity)",
            unbounded,
            rao.len()
        );
    }

    Ok(rao)
}

/// Wave energy spectrum from a measured heave spectrum and a vessel RAO
///
/// `wave[i] = heave[i] / RAO[i]`
///
/// # Errors
///
/// Returns `SpectrumError::LengthMismatch` if the spectra differ in length.
pub fn calculate_wave_energy_spectrum(
    heave_spectrum: &[f32],
    rao: &[f32],
) -> Result<Spectrum, SpectrumError> {
    elementwise_divide(heave_spectrum, rao)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_is_infinite() {
        let result = elementwise_divide(&[4.0, 0.0], &[2.0, 0.0]).unwrap();
        assert_eq!(result[0], 2.0);
        assert_eq!(result[1], f32::INFINITY);
    }

    #[test]
    fn test_length_mismatch() {
        let result = elementwise_divide(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert_eq!(
            result,
            Err(SpectrumError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(calculate_wave_energy_spectrum(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_rao_round_trip() {
        let heave = [2.0, 0.5, 9.0, 0.0, 3.0];
        let wave = [1.0, 0.25, 3.0, 4.0, 0.0];

        let rao = calculate_rao(&heave, &wave).unwrap();
        let recovered = calculate_wave_energy_spectrum(&heave, &rao).unwrap();

        for i in 0..heave.len() {
            if heave[i] != 0.0 && wave[i] != 0.0 {
                assert!(
                    (recovered[i] - wave[i]).abs() < 1e-6,
                    "bin {}: expected {}, got {}",
                    i,
                    wave[i],
                    recovered[i]
                );
            }
        }
        // Zero wave energy gives an infinite RAO, and heave / ∞ = 0 recovers it
        assert_eq!(rao[4], f32::INFINITY);
        assert_eq!(recovered[4], 0.0);
    }

    #[test]
    fn test_empty_spectra() {
        assert!(elementwise_divide(&[], &[]).unwrap().is_empty());
    }
}
