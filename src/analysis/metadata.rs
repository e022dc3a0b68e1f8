//! Estimation metadata structures

use serde::{Deserialize, Serialize};

/// Estimation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationMetadata {
    /// Algorithm version
    pub algorithm_version: String,

    /// Number of heave acceleration samples read
    pub input_samples: usize,

    /// Number of frequency bins in the spectrum (a power of two)
    pub spectrum_len: usize,

    /// Bins where the RAO was zero, leaving the wave energy unbounded
    pub unbounded_bins: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,
}

impl Default for EstimationMetadata {
    fn default() -> Self {
        Self {
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            input_samples: 0,
            spectrum_len: 0,
            unbounded_bins: 0,
            processing_time_ms: 0.0,
        }
    }
}
