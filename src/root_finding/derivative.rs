//! Finite-difference derivative estimates, used by [`super::newton`].
//!
//! ┌ [`FiniteDifference::Central`] : `(f(x + h) - f(x - h)) / 2h`, O(h²)
//! └ [`FiniteDifference::Forward`] : `(f(x + h) - f(x)) / h`, O(h)
//!
//! No degeneracy is special-cased: a vanishing or non-finite estimate is
//! returned as-is and propagates through the Newton update.

use super::real::Real;


/// Difference scheme for estimating `f'(x)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FiniteDifference {
    Forward,
    #[default]
    Central,
}

impl FiniteDifference {
    /// Estimates `f'(x)` with step `h`, reusing the known `fx = f(x)`
    /// where the scheme needs it.
    #[inline]
    pub fn estimate<T, F>(self, func: &mut F, x: T, fx: T, h: T) -> T
    where
        T: Real,
        F: FnMut(T) -> T,
    {
        match self {
            FiniteDifference::Forward => forward_difference(func, x, fx, h),
            FiniteDifference::Central => central_difference(func, x, h),
        }
    }

    /// Function evaluations spent by one estimate (beyond `f(x)`).
    pub const fn evaluations(self) -> usize {
        match self {
            FiniteDifference::Forward => 1,
            FiniteDifference::Central => 2,
        }
    }
}


/// Central difference `(f(x + h) - f(x - h)) / 2h`.
#[inline]
pub fn central_difference<T, F>(func: &mut F, x: T, h: T) -> T
where
    T: Real,
    F: FnMut(T) -> T,
{
    let fxp = func(x + h);
    let fxm = func(x - h);
    (fxp - fxm) / (T::two() * h)
}


/// Forward difference `(f(x + h) - f(x)) / h` with a known `fx = f(x)`.
#[inline]
pub fn forward_difference<T, F>(func: &mut F, x: T, fx: T, h: T) -> T
where
    T: Real,
    F: FnMut(T) -> T,
{
    (func(x + h) - fx) / h
}
