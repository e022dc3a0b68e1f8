//! Wave spectrum result types

use super::metadata::EstimationMetadata;
use crate::spectral::Spectrum;
use serde::{Deserialize, Serialize};

/// One frequency bin of a spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumBin {
    /// Bin index
    pub index: usize,

    /// Bin centre frequency in Hz
    pub frequency_hz: f32,

    /// Wave energy spectral density (may be `+∞` where the RAO is zero)
    pub density: f32,
}

/// Estimated ocean wave energy spectrum
///
/// Bin `i` sits at `i / (timestep · len)` Hz. Only bins `0..=len/2` (up to
/// Nyquist) carry independent information for a real-valued input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveSpectrumEstimate {
    /// Time between successive input samples in seconds
    pub timestep: f32,

    /// Wave energy spectral density per bin, full padded length
    pub spectrum: Spectrum,

    /// Estimation metadata
    pub metadata: EstimationMetadata,
}

impl WaveSpectrumEstimate {
    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.spectrum.len()
    }

    /// True if the spectrum has no bins
    pub fn is_empty(&self) -> bool {
        self.spectrum.is_empty()
    }

    /// Bin spacing `Δf = 1 / (timestep · len)` in Hz
    pub fn frequency_resolution(&self) -> f32 {
        1.0 / (self.timestep * self.spectrum.len() as f32)
    }

    /// Centre frequency of bin `index` in Hz
    pub fn frequency(&self, index: usize) -> f32 {
        self.frequency_resolution() * index as f32
    }

    /// Bins from DC up to and including Nyquist
    pub fn bins(&self) -> impl Iterator<Item = SpectrumBin> + '_ {
        let nyquist = self.spectrum.len() / 2;
        self.spectrum
            .iter()
            .take(nyquist + 1)
            .enumerate()
            .map(move |(index, &density)| SpectrumBin {
                index,
                frequency_hz: self.frequency(index),
                density,
            })
    }

    /// Evenly decimated bins for display
    ///
    /// With `m = len / 2`, every bin up to `m` is returned when `m <= max_lines`;
    /// otherwise bins `0, s, 2s, ... <= m` with stride `s = m / (max_lines - 1)`.
    /// Rounding in the stride can yield slightly more than `max_lines` rows.
    pub fn summary(&self, max_lines: usize) -> Vec<SpectrumBin> {
        let maximum_index = self.spectrum.len() / 2;
        let stride = if maximum_index > max_lines && max_lines > 1 {
            (maximum_index / (max_lines - 1)).max(1)
        } else {
            1
        };

        self.bins().step_by(stride).collect()
    }
}
