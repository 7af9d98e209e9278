use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::validate_bracket;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{BracketError, RootFindingError, ToleranceError};
use super::real::Real;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::tolerances::step_within;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    InvalidBracket(#[from] BracketError),
}


/// Bisection Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `eps` and optional `max_iter`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
///
/// # Defaults
/// - `eps` is `sqrt(T::epsilon())`.
/// - If `max_iter` is `None`, the bound is [`Real::DIGITS`] halvings,
///   which is enough to exhaust the precision of `T` for any bracket.
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg<T: Real> {
    common: CommonCfg<T>,
}
impl<T: Real> BisectionCfg<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(BisectionCfg);


/// Finds a root in `[xl, xu]` by bisection, returning the root or NaN.
///
/// Shorthand for [`bisection`] with a default [`BisectionCfg`] and the
/// given `eps`.
///
/// # Errors
/// - See [`bisection`]; invalid `eps` is reported as [`BisectionError::Tolerance`].
pub fn solve<T, F>(func: F, xl: T, xu: T, eps: T) -> Result<T, BisectionError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let cfg = BisectionCfg::new().set_eps(eps)?;
    Ok(bisection(func, xl, xu, cfg)?.root)
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[xl, xu]`
/// and that `func(xl)` and `func(xu)` do not share a sign, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `xl`   - Lower bound of the search interval. Must be finite and `<= xu`.
/// ├ `xu`   - Upper bound of the search interval. Must be finite.
/// └ `cfg`  - [`BisectionCfg`] with `eps` and optional `max_iter`.
///
/// # Returns
///
/// [`RootFindingReport`] with
/// ├ `root`       : endpoint of the final bracket on the negative side, NaN if exhausted
/// ├ `iterations` : number of halvings, 0 if a bound is already a root
/// ├ `termination_reason`
/// │  ├ [`TerminationReason::ToleranceReached`] : half-width `< eps`
/// │  ├ [`TerminationReason::ExactRoot`]        : `f(x) == 0`
/// │  └ [`TerminationReason::IterationLimit`]   : bound exhausted, root is NaN
/// └ `stencil`    : final bracket
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBracket`] - `xl > xu`, non-finite bounds, or
/// │                                      `func(xl)`, `func(xu)` share a strict sign.
/// └ [`BisectionError::Tolerance`]      - `eps` was not validated through the cfg.
///
/// # Notes
/// ├ The bracket is validated after exactly two evaluations, before iterating.
/// └ The returned root lies in `[xl, xu]` within `eps` of a sign change.
pub fn bisection<T, F>(
    func: F,
    xl: T,
    xu: T,
    cfg: BisectionCfg<T>
) -> Result<RootFindingReport<T>, BisectionError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let report = bisection_loop(func, xl, xu, cfg)?;
    report.log_termination();
    Ok(report)
}


fn bisection_loop<T, F>(
    mut func: F,
    xl: T,
    xu: T,
    cfg: BisectionCfg<T>
) -> Result<RootFindingReport<T>, BisectionError>
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

    let fxl = eval(xl);
    let fxu = eval(xu);
    validate_bracket(xl, xu, fxl, fxu)?;

    // immediate bounds are roots
    if fxl == T::zero() {
        return Ok(RootFindingReport::exact(xl, 0, evals, Stencil::bracket(xl, xu), algo_name));
    }
    if fxu == T::zero() {
        return Ok(RootFindingReport::exact(xu, 0, evals, Stencil::bracket(xl, xu), algo_name));
    }

    // anchor on the negative side, step towards the positive side
    let (mut rtb, mut f_rtb, mut dx) = if fxl < T::zero() {
        (xl, fxl, xu - xl)
    } else {
        (xu, fxu, xl - xu)
    };

    for iter in 1..=num_iter {
        dx = dx * T::half();
        let xmid = rtb + dx;
        let fmid = eval(xmid);
        tracing::trace!(algorithm = algo_name, iter, x = %xmid, fx = %fmid, half_width = %dx.abs());

        if fmid <= T::zero() {
            rtb   = xmid;
            f_rtb = fmid;
        }

        if fmid == T::zero() {
            return Ok(RootFindingReport::exact(rtb, iter, evals, Stencil::bracket(rtb, rtb), algo_name));
        }

        if step_within(dx, eps) {
            return Ok(RootFindingReport {
                root                : rtb,
                f_root              : f_rtb,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
                stencil             : Stencil::bracket(rtb, rtb + dx),
                algorithm_name      : algo_name,
            });
        }
    }

    Ok(RootFindingReport::exhausted(num_iter, evals, Stencil::bracket(rtb, rtb + dx), algo_name))
}
