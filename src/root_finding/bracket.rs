//! Bracket validation shared by the closed methods
//! (bisection, regula falsi, brent).

use super::errors::BracketError;
use super::real::Real;
use super::signs::same_sign;


/// Checks `xl <= xu` and that `f(xl)`, `f(xu)` do not share a strict sign.
///
/// # Errors
/// - [`BracketError::Reversed`]     : `xl > xu` or a bound is NaN/inf
/// - [`BracketError::NoSignChange`] : both values share a sign, or one is NaN
///
/// # Notes
/// - An endpoint value of exactly zero is a valid bracket.
/// - `xl == xu` is accepted; it only passes when that point is a zero.
pub(crate) fn validate_bracket<T: Real>(
    xl: T, xu: T, fxl: T, fxu: T
) -> Result<(), BracketError> {
    if !(xl.is_finite() && xu.is_finite()) || xl > xu {
        tracing::debug!(xl = %xl, xu = %xu, "rejecting reversed bracket");
        return Err(BracketError::Reversed { xl: xl.as_f64(), xu: xu.as_f64() });
    }

    if fxl.is_nan() || fxu.is_nan() || same_sign(fxl, fxu) {
        tracing::debug!(xl = %xl, xu = %xu, fxl = %fxl, fxu = %fxu, "rejecting bracket without sign change");
        return Err(BracketError::NoSignChange {
            xl  : xl.as_f64(),
            xu  : xu.as_f64(),
            fxl : fxl.as_f64(),
            fxu : fxu.as_f64(),
        });
    }

    Ok(())
}
