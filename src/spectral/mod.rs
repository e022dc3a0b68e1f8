//! Spectral estimation core
//!
//! - Power-of-two sizing
//! - Complex arithmetic
//! - Radix-2 decimation-in-time FFT
//! - Magnitude and power spectrum (periodogram) estimation
//! - Elementwise spectral combination (RAO, wave energy spectrum)

pub mod combine;
pub mod complex;
pub mod fft;
pub mod sizing;
pub mod spectrum;

use crate::io::sample_buffer::SampleBuffer;

/// Non-negative per-bin energy values, length always a power of two
pub type Spectrum = SampleBuffer;

/// Response Amplitude Operator: heave / wave energy ratio per frequency bin
pub type Rao = SampleBuffer;
