//! Convergence tests for root-finding algorithms.
//!
//! All methods share one absolute tolerance `eps`:
//! - `step_within(dx, eps)` : `|dx| < eps`, used for bisection half-widths and
//!   for the step between successive open/regula falsi estimates
//! - `brent_tol(b, eps)`    : `2·eps·|b| + eps/2`, Brent's per-iteration tolerance
//!
//! A NaN step never satisfies a test, so IEEE degeneracies fall through to
//! the iteration bound.

use super::real::Real;


#[inline]
pub(crate) fn step_within<T: Real>(dx: T, eps: T) -> bool {
    dx.abs() < eps
}


#[inline]
pub(crate) fn brent_tol<T: Real>(b: T, eps: T) -> T {
    T::two() * eps * b.abs() + T::half() * eps
}
