use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::validate_bracket;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{BracketError, RootFindingError, ToleranceError};
use super::real::Real;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::opposite_sign;
use super::tolerances::step_within;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois);

/// Consecutive retentions of one endpoint before its value is halved.
const ILLINOIS_RETENTIONS: usize = 2;


#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    InvalidBracket(#[from] BracketError),
}


/// RegulaFalsi Configuration
///
/// # Defaults
/// - `eps` is `sqrt(T::epsilon())`.
/// - If `max_iter` is `None`, the bound is [`Real::DIGITS`] iterations.
#[derive(Debug, Copy, Clone)]
pub struct RegulaFalsiCfg<T: Real> {
    common: CommonCfg<T>,
}
impl<T: Real> RegulaFalsiCfg<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(RegulaFalsiCfg);


/// Finds a root in `[xl, xu]` by Illinois false position, returning the
/// root or NaN.
///
/// # Errors
/// - See [`regula_falsi`].
pub fn solve<T, F>(func: F, xl: T, xu: T, eps: T) -> Result<T, RegulaFalsiError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let cfg = RegulaFalsiCfg::new().set_eps(eps)?;
    Ok(regula_falsi(func, xl, xu, cfg)?.root)
}


/// x-intercept of the line through `(xl, fl)` and `(xu, fu)`.
///
/// With `fl`, `fu` of strictly opposite sign the denominator cannot vanish
/// and the intercept lies inside `[xl, xu]`.
#[inline]
fn false_position<T: Real>((xl, fl): (T, T), (xu, fu): (T, T)) -> T {
    xu - fu * (xl - xu) / (fl - fu)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi)
/// with the Illinois correction.
///
/// This method assumes that the function `func` is continuous on the interval `[xl, xu]`
/// and that `func(xl)` and `func(xu)` do not share a sign.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `xl`   - Lower bound of the search interval. Must be finite and `<= xu`.
/// ├ `xu`   - Upper bound of the search interval. Must be finite.
/// └ `cfg`  - [`RegulaFalsiCfg`] with `eps` and optional `max_iter`.
///
/// # Behavior
/// ├ Update: `x_r = xu - f(xu) (xl - xu) / (f(xl) - f(xu))`, replacing the
/// │         endpoint whose value shares the sign of `f(x_r)`.
/// ├ Illinois: once the same endpoint has been retained twice in a row, its
/// │           interpolation value is halved (the true value is untouched),
/// │           pulling the next intercept towards it.
/// └ Tolerance: `|x_r - x_r_prev| < eps` ([`ToleranceSatisfied::StepSizeReached`]),
///              or `f(x_r) == 0`. The first intercept has no predecessor.
///
/// # Errors
///
/// ┌ [`RegulaFalsiError::InvalidBracket`] - reversed/non-finite bounds or no sign change.
/// └ [`RegulaFalsiError::Tolerance`]      - invalid `eps`.
///
/// # Notes
/// └ If `f(x_r)` is NaN the bracket is kept as is; the bound then runs out
///   and the report carries a NaN root.
pub fn regula_falsi<T, F>(
    func: F,
    xl: T,
    xu: T,
    cfg: RegulaFalsiCfg<T>
) -> Result<RootFindingReport<T>, RegulaFalsiError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let report = regula_falsi_loop(func, xl, xu, cfg)?;
    report.log_termination();
    Ok(report)
}


fn regula_falsi_loop<T, F>(
    mut func: F,
    mut xl: T,
    mut xu: T,
    cfg: RegulaFalsiCfg<T>
) -> Result<RootFindingReport<T>, RegulaFalsiError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let eps       = cfg.eps();
    let num_iter  = ALGORITHM.iteration_bound::<T>(cfg.max_iter());
    let algo_name = ALGORITHM.algorithm_name();

    // number of function evaluations
    let mut evals = 0;
    let mut eval  = |x: T| -> T { evals += 1; func(x) };

    let mut fl = eval(xl);
    let mut fu = eval(xu);
    validate_bracket(xl, xu, fl, fu)?;

    // immediate bounds are roots
    if fl == T::zero() {
        return Ok(RootFindingReport::exact(xl, 0, evals, Stencil::bracket(xl, xu), algo_name));
    }
    if fu == T::zero() {
        return Ok(RootFindingReport::exact(xu, 0, evals, Stencil::bracket(xl, xu), algo_name));
    }

    // consecutive retentions of each endpoint
    let mut kept_l = 0;
    let mut kept_u = 0;
    let mut prev: Option<T> = None;

    for iter in 1..=num_iter {
        let xr = false_position((xl, fl), (xu, fu));
        let fr = eval(xr);
        tracing::trace!(algorithm = algo_name, iter, x = %xr, fx = %fr, "false position");

        if fr == T::zero() {
            return Ok(RootFindingReport::exact(xr, iter, evals, Stencil::bracket(xl, xu), algo_name));
        }
        if fr.is_nan() {
            continue;
        }

        if opposite_sign(fl, fr) {
            // root inside [xl, xr], xl retained
            xu = xr;
            fu = fr;
            kept_u = 0;
            kept_l += 1;
            if kept_l >= ILLINOIS_RETENTIONS {
                fl = fl * T::half();
            }
        } else {
            // root inside [xr, xu], xu retained
            xl = xr;
            fl = fr;
            kept_l = 0;
            kept_u += 1;
            if kept_u >= ILLINOIS_RETENTIONS {
                fu = fu * T::half();
            }
        }

        if prev.is_some_and(|p| step_within(xr - p, eps)) {
            return Ok(RootFindingReport {
                root                : xr,
                f_root              : fr,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::bracket(xl, xu),
                algorithm_name      : algo_name,
            });
        }
        prev = Some(xr);
    }

    Ok(RootFindingReport::exhausted(num_iter, evals, Stencil::bracket(xl, xu), algo_name))
}
