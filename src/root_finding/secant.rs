use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::real::Real;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::tolerances::step_within;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `eps` and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, the bound is [`Real::DIGITS`] iterations.
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg<T: Real> {
    common: CommonCfg<T>,
}
impl<T: Real> SecantCfg<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(SecantCfg);


/// Finds a root starting from `x0`, `x1` by the secant method, returning
/// the root or NaN.
///
/// # Errors
/// - See [`secant`].
pub fn solve<T, F>(func: F, x0: T, x1: T, eps: T) -> Result<T, SecantError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let cfg = SecantCfg::new().set_eps(eps)?;
    Ok(secant(func, x0, x1, cfg)?.root)
}


/// Secant increment from the most recent iterate `rts`:
/// `dx = (xl - rts) f(rts) / (f(rts) - f(xl))`.
///
/// Equal function values give an infinite or NaN increment on purpose.
#[inline]
fn secant_step<T: Real>((xl, fl): (T, T), (rts, f): (T, T)) -> T {
    (xl - rts) * f / (f - fl)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SecantCfg`] (`eps`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : approximate root, NaN if the bound was exhausted
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : [`ToleranceSatisfied::StepSizeReached`] or
///                           [`ToleranceSatisfied::ExactZero`]
/// - `stencil`             : the two iterates used to form the last step
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::Tolerance`] : invalid `eps`
///
/// # Behavior
/// - The guess with the smaller `|f|` is taken as the most recent iterate.
/// - Update: `x_{k+1} = x_k + (x_{k-1} - x_k) f(x_k) / (f(x_k) - f(x_{k-1}))`.
/// - Stops when `|x_{k+1} - x_k| < eps` or `f(x_{k+1}) == 0`.
/// - A collapsing denominator (`f(x_k) == f(x_{k-1})`, including `x0 == x1`)
///   is not special-cased: inf/NaN propagate and the report ends with
///   [`TerminationReason::IterationLimit`].
///
/// # Warning
/// - This is an open method: it may diverge, or converge to a root outside
///   the span of the initial guesses. For guaranteed convergence use a
///   bracketed method (e.g. bisection/brent).
pub fn secant<T, F>(
    func: F,
    x0: T,
    x1: T,
    cfg: SecantCfg<T>
) -> Result<RootFindingReport<T>, SecantError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let report = secant_loop(func, x0, x1, cfg)?;
    report.log_termination();
    Ok(report)
}


fn secant_loop<T, F>(
    mut func: F,
    x0: T,
    x1: T,
    cfg: SecantCfg<T>
) -> Result<RootFindingReport<T>, SecantError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let eps       = cfg.eps();
    let num_iter  = ALGORITHM.iteration_bound::<T>(cfg.max_iter());
    let algo_name = ALGORITHM.algorithm_name();

    // track function evaluations
    let mut evals = 0;
    let mut eval  = |x: T| -> T { evals += 1; func(x) };

    let f0 = eval(x0);
    let f1 = eval(x1);

    // most recent iterate gets the smaller |f|
    let (mut xl, mut fl, mut rts, mut f) = if f0.abs() < f1.abs() {
        (x1, f1, x0, f0)
    } else {
        (x0, f0, x1, f1)
    };

    for iter in 1..=num_iter {
        let dx = secant_step((xl, fl), (rts, f));
        let stencil = Stencil::doubleton(rts, xl);
        xl  = rts;
        fl  = f;
        rts = rts + dx;
        f   = eval(rts);
        tracing::trace!(algorithm = algo_name, iter, x = %rts, fx = %f, step = %dx);

        if f == T::zero() {
            return Ok(RootFindingReport::exact(rts, iter, evals, stencil, algo_name));
        }
        if step_within(dx, eps) {
            return Ok(RootFindingReport {
                root                : rts,
                f_root              : f,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil,
                algorithm_name      : algo_name,
            });
        }
    }

    Ok(RootFindingReport::exhausted(num_iter, evals, Stencil::doubleton(rts, xl), algo_name))
}
