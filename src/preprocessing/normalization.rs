//! Mean removal
//!
//! Integrated displacement drifts away from zero; removing the mean keeps the
//! DC bin from dominating the heave spectrum.

/// Subtract the arithmetic mean from every sample, in place
///
/// No-op on an empty slice.
///
/// # Example
///
/// ```
/// use wave_spectrum::preprocessing::normalization::subtract_mean;
///
/// let mut samples = vec![1.0f32, 2.0, 3.0];
/// subtract_mean(&mut samples);
/// assert_eq!(samples, vec![-1.0, 0.0, 1.0]);
/// ```
pub fn subtract_mean(samples: &mut [f32]) {
    if samples.is_empty() {
        return;
    }

    // Accumulate in f64; long series lose precision in an f32 running sum
    let mean = (samples.iter().map(|&x| x as f64).sum::<f64>() / samples.len() as f64) as f32;
    for x in samples.iter_mut() {
        *x -= mean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract_mean_zero_result() {
        let mut samples: Vec<f32> = (0..100).map(|i| i as f32 * 0.1 + 5.0).collect();
        subtract_mean(&mut samples);
        let mean: f32 = samples.iter().sum::<f32>() / samples.len() as f32;
        assert!(mean.abs() < 1e-4, "mean after removal = {}", mean);
    }

    #[test]
    fn test_subtract_mean_empty() {
        let mut samples: Vec<f32> = vec![];
        subtract_mean(&mut samples);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_subtract_mean_constant() {
        let mut samples = vec![7.5f32; 10];
        subtract_mean(&mut samples);
        assert!(samples.iter().all(|&x| x == 0.0));
    }
}
