//! Floating-point abstraction shared by every solver.
//!
//! [`Real`] extends [`num_traits::Float`] with the number of significand
//! digits of the type, which bounds the iteration count of the bracketing
//! and secant methods.

use std::fmt::{Debug, Display};

use num_traits::Float;


/// Floating-point type a solver can run on.
///
/// Implemented for `f32` and `f64`.
pub trait Real: Float + Debug + Display + Send + Sync + 'static {
    /// Significand digits in base 2 (`24` for `f32`, `53` for `f64`).
    const DIGITS: usize;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Lossy widening used for error payloads.
    fn as_f64(self) -> f64;
}

impl Real for f32 {
    const DIGITS: usize = f32::MANTISSA_DIGITS as usize;

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const DIGITS: usize = f64::MANTISSA_DIGITS as usize;

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
