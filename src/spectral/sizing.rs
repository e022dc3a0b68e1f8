//! Power-of-two sizing for FFT-bound buffers

use crate::error::SpectrumError;

/// Round a requested element count up to the next power of two
///
/// Requests of 0 and 1 both yield 1. Returns `None` when no power of two
/// representable in `usize` is large enough, which means the requested
/// spectrum cannot be represented at all.
///
/// # Example
///
/// ```
/// use wave_spectrum::spectral::sizing::round_up_to_power_of_two;
///
/// assert_eq!(round_up_to_power_of_two(5), Some(8));
/// assert_eq!(round_up_to_power_of_two(8), Some(8));
/// assert_eq!(round_up_to_power_of_two(usize::MAX), None);
/// ```
pub fn round_up_to_power_of_two(requested: usize) -> Option<usize> {
    requested.checked_next_power_of_two()
}

/// Padded spectrum length for `requested` samples, as a `Result`
///
/// # Errors
///
/// Returns `SpectrumError::SizingOverflow` if the length is not representable.
pub fn padded_length(requested: usize) -> Result<usize, SpectrumError> {
    round_up_to_power_of_two(requested).ok_or(SpectrumError::SizingOverflow { requested })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_requests() {
        assert_eq!(round_up_to_power_of_two(0), Some(1));
        assert_eq!(round_up_to_power_of_two(1), Some(1));
        assert_eq!(round_up_to_power_of_two(2), Some(2));
        assert_eq!(round_up_to_power_of_two(3), Some(4));
        assert_eq!(round_up_to_power_of_two(5), Some(8));
        assert_eq!(round_up_to_power_of_two(8), Some(8));
        assert_eq!(round_up_to_power_of_two(1025), Some(2048));
    }

    #[test]
    fn test_smallest_power_of_two() {
        for n in 0..5000usize {
            let p = round_up_to_power_of_two(n).unwrap();
            assert!(p.is_power_of_two());
            assert!(p >= n);
            // Half of p must not be enough, otherwise p was not the smallest
            assert!(p == 1 || p / 2 < n, "{} is not the smallest power of two >= {}", p, n);
        }
    }

    #[test]
    fn test_largest_representable() {
        let largest = usize::MAX / 2 + 1;
        assert_eq!(round_up_to_power_of_two(largest), Some(largest));
        assert_eq!(round_up_to_power_of_two(largest - 1), Some(largest));
        assert_eq!(round_up_to_power_of_two(largest + 1), None);
        assert_eq!(round_up_to_power_of_two(usize::MAX), None);
    }

    #[test]
    fn test_padded_length_overflow() {
        assert_eq!(padded_length(6), Ok(8));
        assert_eq!(
            padded_length(usize::MAX),
            Err(SpectrumError::SizingOverflow {
                requested: usize::MAX
            })
        );
    }
}
