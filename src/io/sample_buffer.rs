//! Owned, growable sample buffer
//!
//! Every real-valued sequence in the pipeline (time series, spectra, RAOs)
//! lives in a [`SampleBuffer`]. The logical length is the number of samples;
//! the physical capacity may be larger. Growth only ever appends zeros, and
//! there is no shrink operation: [`SampleBuffer::release`] drops the storage
//! entirely.

use crate::error::SpectrumError;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Owned sequence of `f32` samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleBuffer {
    data: Vec<f32>,
}

impl SampleBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a zero-filled buffer of `len` samples
    ///
    /// # Errors
    ///
    /// Returns `SpectrumError::AllocationFailure` if the storage cannot be allocated.
    pub fn zeroed(len: usize) -> Result<Self, SpectrumError> {
        let mut buffer = Self::new();
        buffer.grow(len)?;
        Ok(buffer)
    }

    /// Take ownership of existing samples
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Logical length (number of samples)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Physical capacity; always `>= len()`
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Samples as a slice
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Samples as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the buffer, returning its samples
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Zero-extend the buffer to `new_len` samples
    ///
    /// No-op if `new_len <= len()`. Existing samples are preserved and the new
    /// tail is zero-filled. On failure the buffer is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `SpectrumError::AllocationFailure` if the storage cannot grow.
    pub fn grow(&mut self, new_len: usize) -> Result<(), SpectrumError> {
        let len = self.data.len();
        if new_len <= len {
            return Ok(());
        }

        self.data
            .try_reserve_exact(new_len - len)
            .map_err(|_| SpectrumError::AllocationFailure { elements: new_len })?;
        self.data.resize(new_len, 0.0);

        log::debug!("Grew sample buffer from {} to {} samples", len, new_len);
        Ok(())
    }

    /// Drop all samples and return the storage to the allocator
    ///
    /// Safe to call any number of times.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }
}

impl Deref for SampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.data
    }
}

impl DerefMut for SampleBuffer {
    fn deref_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl AsRef<[f32]> for SampleBuffer {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

impl From<Vec<f32>> for SampleBuffer {
    fn from(data: Vec<f32>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<f32> for SampleBuffer {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
