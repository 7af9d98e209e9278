//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if nonzero values have opposite sign
//! - `same_sign`     : `true` if nonzero values share the same sign
//!
//! Both are `false` when either value is zero or NaN.

use super::real::Real;


/// Returns `true` if `x` and `y` have strictly opposite signs.
#[inline]
pub(crate) fn opposite_sign<T: Real>(x: T, y: T) -> bool {
    (x < T::zero() && y > T::zero()) || (x > T::zero() && y < T::zero())
}


/// Returns `true` if `x` and `y` have strictly the same sign.
#[inline]
pub(crate) fn same_sign<T: Real>(x: T, y: T) -> bool {
    (x > T::zero() && y > T::zero()) || (x < T::zero() && y < T::zero())
}


/// `+1`, `-1` or `0` following the sign of `x`.
#[inline]
pub(crate) fn sign<T: Real>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}
