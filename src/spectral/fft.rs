//! Radix-2 decimation-in-time FFT
//!
//! Recursive divide-and-conquer transform over a power-of-two-length complex
//! sequence. The even/odd split is expressed as a stride-doubling descent over
//! an immutable input view, so no sub-sequences are copied.
//!
//! # Algorithm
//!
//! For an N-point stage with input view `(offset, stride)`:
//!
//! 1. Transform the even samples `(offset, 2·stride)` into the lower half of the output
//! 2. Transform the odd samples `(offset + stride, 2·stride)` into the upper half
//! 3. Butterfly each bin `k < N/2` with twiddle `w = e^(-2πik/N)`:
//!    `X[k] = E[k] + w·O[k]`, `X[k + N/2] = E[k] - w·O[k]`
//!
//! Output is in natural frequency order. The caller zero-pads beforehand;
//! this module never pads.
//!
//! # Example
//!
//! ```
//! use wave_spectrum::spectral::complex::{from_real, Complex32};
//! use wave_spectrum::spectral::fft::transform;
//!
//! let input = vec![from_real(1.0); 4];
//! let output = transform(&input)?;
//! assert_eq!(output[0], Complex32::new(4.0, 0.0));
//! # Ok::<(), wave_spectrum::SpectrumError>(())
//! ```

use super::complex::{rotation, Complex32, ZERO};
use crate::error::SpectrumError;
use std::f64::consts::PI;

/// Forward DFT of a power-of-two-length sequence
///
/// # Arguments
///
/// * `input` - Complex samples; length must be a non-zero power of two
///
/// # Returns
///
/// Transform of the input, same length, natural frequency order
///
/// # Errors
///
/// Returns `SpectrumError::InvalidInput` if the length is not a power of two,
/// or `SpectrumError::AllocationFailure` if the output cannot be allocated.
pub fn transform(input: &[Complex32]) -> Result<Vec<Complex32>, SpectrumError> {
    let n = input.len();
    if !n.is_power_of_two() {
        return Err(SpectrumError::InvalidInput(format!(
            "Transform length {} is not a power of two",
            n
        )));
    }

    let mut output = allocate_complex(n)?;
    dit2(&mut output, input, 0, 1);
    Ok(output)
}

/// Zero-filled complex buffer of `len` elements, reporting allocation failure
pub(crate) fn allocate_complex(len: usize) -> Result<Vec<Complex32>, SpectrumError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| SpectrumError::AllocationFailure { elements: len })?;
    buffer.resize(len, ZERO);
    Ok(buffer)
}

/// Transform `output.len()` samples of `input` starting at `offset`, taking
/// every `stride`-th element, into `output`.
fn dit2(output: &mut [Complex32], input: &[Complex32], offset: usize, stride: usize) {
    let n = output.len();
    if n == 1 {
        output[0] = input[offset];
        return;
    }

    let half = n / 2;
    let (even, odd) = output.split_at_mut(half);
    dit2(even, input, offset, stride * 2);
    dit2(odd, input, offset + stride, stride * 2);

    for k in 0..half {
        let p = even[k];
        let twiddle = rotation(-2.0 * PI * k as f64 / n as f64);
        let q = twiddle * odd[k];
        even[k] = p + q;
        odd[k] = p - q;
    }
}
