//! Single-precision complex samples for the radix-2 transform
//!
//! Arithmetic (`+`, `-`, `*`, `norm`) comes from `num_complex`. This module
//! adds the constructors the transform needs, with twiddle angles evaluated
//! in `f64`.

pub use num_complex::Complex32;

/// Zero-valued sample
pub const ZERO: Complex32 = Complex32::new(0.0, 0.0);

/// Real-valued sample (imaginary part zero)
pub const fn from_real(re: f32) -> Complex32 {
    Complex32::new(re, 0.0)
}

/// Point on the unit circle at `angle` radians
///
/// The angle is taken in `f64` so that twiddle factors deep in the
/// recursion do not accumulate phase error; only the result is narrowed.
pub fn rotation(angle: f64) -> Complex32 {
    Complex32::new(angle.cos() as f32, angle.sin() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-6;

    #[test]
    fn test_add_sub() {
        let a = Complex32::new(1.0, 2.0);
        let b = Complex32::new(-3.0, 0.5);
        assert_eq!(a + b, Complex32::new(-2.0, 2.5));
        assert_eq!(a - b, Complex32::new(4.0, 1.5));
    }

    #[test]
    fn test_mul() {
        let a = Complex32::new(1.0, 2.0);
        let b = Complex32::new(3.0, 4.0);
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        assert_eq!(a * b, Complex32::new(-5.0, 10.0));
    }

    #[test]
    fn test_rotation_is_unit() {
        for k in 0..16 {
            let angle = -2.0 * std::f64::consts::PI * k as f64 / 16.0;
            let w = rotation(angle);
            assert!((w.norm() - 1.0).abs() < TOL, "|w| = {}", w.norm());
        }

        let quarter = rotation(-std::f64::consts::FRAC_PI_2);
        assert!(quarter.re.abs() < TOL);
        assert!((quarter.im + 1.0).abs() < TOL);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex32::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(Complex32::new(3.0, 4.0).norm_sqr(), 25.0);
        assert_eq!(ZERO.norm(), 0.0);
        assert_eq!(from_real(-2.5), Complex32::new(-2.5, 0.0));
    }
}
