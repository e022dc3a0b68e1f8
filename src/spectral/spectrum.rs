//! Zero-padded magnitude and power spectrum estimation
//!
//! # Algorithm
//!
//! 1. Pad length = next power of two ≥ N
//! 2. Build a complex buffer of that length: real parts carry the time series,
//!    everything else is zero
//! 3. Radix-2 FFT
//! 4. Magnitude of each bin
//! 5. Periodogram: square each magnitude
//!
//! The spectrum therefore always has the padded length, never N itself
//! (unless N already is a power of two).
//!
//! # Example
//!
//! ```
//! use wave_spectrum::spectral::spectrum::compute_power_spectrum;
//!
//! let displacement = vec![0.0f32; 6];
//! let spectrum = compute_power_spectrum(&displacement)?;
//! assert_eq!(spectrum.len(), 8);
//! # Ok::<(), wave_spectrum::SpectrumError>(())
//! ```

use super::complex::from_real;
use super::fft::{allocate_complex, transform};
use super::sizing::padded_length;
use super::Spectrum;
use crate::error::SpectrumError;
use crate::io::sample_buffer::SampleBuffer;

/// Magnitude spectrum of a zero-padded real time series
///
/// # Arguments
///
/// * `time_series` - Real-valued samples in time order
///
/// # Returns
///
/// `|FFT(x)|` with one value per bin, of length `next_power_of_two(N)`
///
/// # Errors
///
/// Returns `SpectrumError::SizingOverflow` if the padded length is not
/// representable, or `SpectrumError::AllocationFailure` if the padded or
/// output buffers cannot be allocated.
pub fn magnitude_spectrum(time_series: &[f32]) -> Result<Spectrum, SpectrumError> {
    let n = time_series.len();
    let fft_size = padded_length(n)?;

    log::debug!(
        "Computing magnitude spectrum: {} samples zero-padded to {}",
        n,
        fft_size
    );

    let mut padded = allocate_complex(fft_size)?;
    for (slot, &x) in padded.iter_mut().zip(time_series) {
        *slot = from_real(x);
    }

    let bins = transform(&padded)?;
    drop(padded);

    let mut magnitudes = SampleBuffer::zeroed(fft_size)?;
    for (out, bin) in magnitudes.iter_mut().zip(&bins) {
        *out = bin.norm();
    }

    Ok(magnitudes)
}

/// Periodogram (power spectrum) from a magnitude spectrum
///
/// Elementwise square: `S[i] = F[i]²`.
///
/// # Errors
///
/// Returns `SpectrumError::AllocationFailure` if the output cannot be allocated.
pub fn periodogram(magnitudes: &[f32]) -> Result<Spectrum, SpectrumError> {
    let mut power = SampleBuffer::zeroed(magnitudes.len())?;
    for (out, &m) in power.iter_mut().zip(magnitudes) {
        *out = m * m;
    }
    Ok(power)
}

/// Power spectrum of a zero-padded real time series
///
/// Equivalent to `periodogram(&magnitude_spectrum(time_series)?)?`, squaring
/// in place so no second spectrum-sized buffer is needed.
///
/// # Errors
///
/// Same as [`magnitude_spectrum`]. On error no spectrum is returned.
pub fn compute_power_spectrum(time_series: &[f32]) -> Result<Spectrum, SpectrumError> {
    let mut spectrum = magnitude_spectrum(time_series)?;
    for value in spectrum.iter_mut() {
        *value *= *value;
    }
    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodogram_squares() {
        let power = periodogram(&[3.0, 4.0]).unwrap();
        assert_eq!(power.as_slice(), &[9.0, 16.0]);
        assert!(periodogram(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_zero_series() {
        let spectrum = compute_power_spectrum(&[0.0; 8]).unwrap();
        assert_eq!(spectrum.len(), 8);
        assert!(spectrum.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_padded_length() {
        assert_eq!(compute_power_spectrum(&[1.0; 5]).unwrap().len(), 8);
        assert_eq!(compute_power_spectrum(&[1.0; 8]).unwrap().len(), 8);
        assert_eq!(compute_power_spectrum(&[1.0; 9]).unwrap().len(), 16);
        assert_eq!(compute_power_spectrum(&[]).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_padding_matches_explicit_padding() {
        let series = [0.5, -1.0, 2.0, 0.25, -0.75];
        let mut explicit = series.to_vec();
        explicit.resize(8, 0.0);

        let implicit = compute_power_spectrum(&series).unwrap();
        let padded = compute_power_spectrum(&explicit).unwrap();
        assert_eq!(implicit, padded);
    }

    #[test]
    fn test_power_is_squared_magnitude() {
        let series: Vec<f32> = (0..16).map(|i| (i as f32 * 0.7).sin()).collect();
        let magnitudes = magnitude_spectrum(&series).unwrap();
        let power = compute_power_spectrum(&series).unwrap();
        assert_eq!(periodogram(&magnitudes).unwrap(), power);
        assert!(power.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_dc_component() {
        // Constant series: all energy in bin 0, |X[0]| = N·c
        let spectrum = compute_power_spectrum(&[2.0; 4]).unwrap();
        assert!((spectrum[0] - 64.0).abs() < 1e-4);
        assert!(spectrum[1..].iter().all(|&p| p.abs() < 1e-6));
    }

    #[test]
    fn test_real_input_is_symmetric() {
        let series: Vec<f32> = (0..32).map(|i| ((i * i) as f32 * 0.13).cos()).collect();
        let spectrum = compute_power_spectrum(&series).unwrap();
        let n = spectrum.len();
        for k in 1..n / 2 {
            let a = spectrum[k];
            let b = spectrum[n - k];
            assert!(
                (a - b).abs() <= 1e-3 * a.max(1.0),
                "bin {} ({}) and bin {} ({}) should match",
                k,
                a,
                n - k,
                b
            );
        }
    }
}
