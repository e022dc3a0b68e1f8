//! Measurement uncertainty injection
//!
//! Each raw measurement `v` with uncertainty width `w` is replaced by a draw
//! from the uniform distribution on `[v - w/2, v + w/2]`. The draw itself is
//! delegated to an [`UncertaintySampler`], so callers can plug in a seeded
//! RNG, a deterministic midpoint, or an external uncertainty runtime.

use crate::error::SpectrumError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Widest support handed to `Uniform`; wider ranges collapse to the midpoint
const MAX_WIDTH: f32 = f32::MAX / 2.0;

/// Source of samples from a uniform distribution
pub trait UncertaintySampler {
    /// Draw a value from the uniform distribution on `[lower, upper]`
    fn sample_uniform(&mut self, lower: f32, upper: f32) -> f32;
}

/// Random uniform draws from a `StdRng`
#[derive(Debug, Clone)]
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    /// Sampler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sampler
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded sampler when `seed` is set, entropy-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UncertaintySampler for UniformSampler {
    fn sample_uniform(&mut self, lower: f32, upper: f32) -> f32 {
        // Degenerate support, or too wide for `Uniform` to scale without overflow
        if lower.is_nan() || upper.is_nan() || lower >= upper || upper - lower > MAX_WIDTH {
            return midpoint(lower, upper);
        }
        Uniform::new_inclusive(lower, upper).sample(&mut self.rng)
    }
}

/// Deterministic sampler returning the centre of the support
///
/// Equivalent to ignoring measurement uncertainty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSampler;

impl UncertaintySampler for ExactSampler {
    fn sample_uniform(&mut self, lower: f32, upper: f32) -> f32 {
        midpoint(lower, upper)
    }
}

/// Centre of `[lower, upper]` without overflowing near `f32::MAX`
fn midpoint(lower: f32, upper: f32) -> f32 {
    0.5 * lower + 0.5 * upper
}

/// Replace each sample with a uniform draw of width `uncertainty` around it
///
/// # Errors
///
/// Returns `SpectrumError::InvalidInput` if `uncertainty` is negative or not finite,
/// or if the support around a sample overflows `f32`. Samples before the
/// offending one have already been replaced.
pub fn apply_uncertainty<S: UncertaintySampler + ?Sized>(
    samples: &mut [f32],
    uncertainty: f32,
    sampler: &mut S,
) -> Result<(), SpectrumError> {
    if !uncertainty.is_finite() || uncertainty < 0.0 {
        return Err(SpectrumError::InvalidInput(format!(
            "Invalid measurement uncertainty: {}",
            uncertainty
        )));
    }

    log::debug!(
        "Applying uniform uncertainty of width {} to {} samples",
        uncertainty,
        samples.len()
    );

    let half_width = uncertainty / 2.0;
    for (index, value) in samples.iter_mut().enumerate() {
        let lower = *value - half_width;
        let upper = *value + half_width;
        if !lower.is_finite() || !upper.is_finite() || !(upper - lower).is_finite() {
            return Err(SpectrumError::InvalidInput(format!(
                "Sample {} ({}) with uncertainty {} exceeds the f32 range",
                index, *value, uncertainty
            )));
        }
        *value = sampler.sample_uniform(lower, upper);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_within_bounds() {
        let mut sampler = UniformSampler::with_seed(7);
        let original: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.01).sin()).collect();
        let mut samples = original.clone();

        apply_uncertainty(&mut samples, 0.2, &mut sampler).unwrap();

        for (before, after) in original.iter().zip(&samples) {
            assert!(
                (after - before).abs() <= 0.1 + 1e-6,
                "{} drifted too far from {}",
                after,
                before
            );
        }
        assert_ne!(original, samples);
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let mut a = vec![1.0f32; 32];
        let mut b = vec![1.0f32; 32];
        apply_uncertainty(&mut a, 0.5, &mut UniformSampler::with_seed(42)).unwrap();
        apply_uncertainty(&mut b, 0.5, &mut UniformSampler::with_seed(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_sampler_is_identity() {
        let original = vec![0.5f32, -2.0, 3.25];
        let mut samples = original.clone();
        apply_uncertainty(&mut samples, 0.1, &mut ExactSampler).unwrap();
        for (before, after) in original.iter().zip(&samples) {
            assert!((after - before).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_width() {
        let mut samples = vec![1.5f32, -0.5];
        apply_uncertainty(&mut samples, 0.0, &mut UniformSampler::with_seed(1)).unwrap();
        assert_eq!(samples, vec![1.5, -0.5]);
    }

    #[test]
    fn test_invalid_uncertainty() {
        let mut samples = vec![1.0f32];
        assert!(apply_uncertainty(&mut samples, -0.1, &mut ExactSampler).is_err());
        assert!(apply_uncertainty(&mut samples, f32::INFINITY, &mut ExactSampler).is_err());
    }

    #[test]
    fn test_large_value_zero_width_is_preserved() {
        let mut exact = vec![3.0e38f32, -3.0e38];
        apply_uncertainty(&mut exact, 0.0, &mut ExactSampler).unwrap();
        assert_eq!(exact, vec![3.0e38, -3.0e38]);

        let mut uniform = vec![3.0e38f32, -3.0e38];
        apply_uncertainty(&mut uniform, 0.0, &mut UniformSampler::with_seed(1)).unwrap();
        assert_eq!(uniform, vec![3.0e38, -3.0e38]);
    }

    #[test]
    fn test_large_value_midpoint_is_finite() {
        let mut samples = vec![3.0e38f32];
        apply_uncertainty(&mut samples, 1.0e37, &mut ExactSampler).unwrap();
        assert!(samples[0].is_finite());
        assert!((samples[0] - 3.0e38).abs() <= 3.0e38 * 1e-6);
    }

    #[test]
    fn test_support_overflow_is_rejected() {
        let mut samples = vec![0.5f32, 3.0e38];
        let result = apply_uncertainty(&mut samples, 1.0e38, &mut UniformSampler::with_seed(1));
        assert!(matches!(result, Err(SpectrumError::InvalidInput(_))));

        let mut samples = vec![-3.0e38f32];
        let result = apply_uncertainty(&mut samples, 1.0e38, &mut ExactSampler);
        assert!(matches!(result, Err(SpectrumError::InvalidInput(_))));
    }

    #[test]
    fn test_unbounded_support_returns_midpoint() {
        let mut sampler = UniformSampler::with_seed(5);
        let value = sampler.sample_uniform(-3.0e38, 3.0e38);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_from_seed_option() {
        let mut a = UniformSampler::from_seed_option(Some(11));
        let mut b = UniformSampler::with_seed(11);
        assert_eq!(a.sample_uniform(0.0, 1.0), b.sample_uniform(0.0, 1.0));

        let mut unseeded = UniformSampler::from_seed_option(None);
        let value = unseeded.sample_uniform(0.0, 1.0);
        assert!((0.0..=1.0).contains(&value));
    }
}
