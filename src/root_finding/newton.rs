//! Newton-Raphson method with a finite-difference derivative.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::derivative::FiniteDifference;
use super::errors::{RootFindingError, ToleranceError};
use super::real::Real;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::tolerances::step_within;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid finite-difference step: must be finite and > 0. got h={h}")]
    InvalidDerivativeStep { h: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common`     : [`CommonCfg`] with `eps` and optional `max_iter`.
/// - `difference` : finite-difference scheme for `f'(x)` (default: central).
/// - `step`       : finite-difference step `h` (default: `|eps| / 2`).
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, the fixed
///   [`crate::root_finding::algorithms::NEWTON_MAX_ITER`] cap applies.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg<T: Real> {
    common:     CommonCfg<T>,
    difference: FiniteDifference,
    step:       Option<T>,
}
impl<T: Real> NewtonCfg<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common:     CommonCfg::new(),
            difference: FiniteDifference::default(),
            step:       None,
        }
    }

    #[must_use]
    pub fn set_difference(mut self, v: FiniteDifference) -> Self {
        self.difference = v;
        self
    }

    pub fn set_step(mut self, h: T) -> Result<Self, NewtonError> {
        if !h.is_finite() || h <= T::zero() {
            return Err(NewtonError::InvalidDerivativeStep { h: h.as_f64() });
        }
        self.step = Some(h);
        Ok(self)
    }

    #[inline] #[must_use] pub fn difference(&self) -> FiniteDifference { self.difference }

    /// Finite-difference step, `|eps| / 2` unless set explicitly.
    #[inline]
    #[must_use]
    pub fn step(&self) -> T {
        self.step.unwrap_or_else(|| self.common.eps().abs() * T::half())
    }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root near `x0` by Newton-Raphson, returning the root or NaN.
///
/// # Errors
/// - See [`newton`].
pub fn solve<T, F>(func: F, x0: T, eps: T) -> Result<T, NewtonError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let cfg = NewtonCfg::new().set_eps(eps)?;
    Ok(newton(func, x0, cfg)?.root)
}


/// Finds a root of a function using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method),
/// estimating the derivative by finite differences.
///
/// # Arguments
/// - `func` : function to evaluate
/// - `x0`   : initial guess
/// - `cfg`  : [`NewtonCfg`] (`eps`, difference scheme, optional step and max_iter)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`        : final iterate, NaN if the cap was exhausted
/// - `evaluations` : includes the evaluations spent on derivative estimates
/// - `stencil`     : the iterate the last step was taken from
///
/// # Errors
/// - [`NewtonError::Tolerance`] : invalid `eps`
///
/// # Behavior
/// - Update: `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
/// - Stops when `|x_{n+1} - x_n| < eps`, returning `x_{n+1}`, or when
///   `f(x_n) == 0` exactly.
/// - A vanishing derivative is not special-cased: the step becomes
///   infinite/NaN and the report ends with [`TerminationReason::IterationLimit`].
/// - There is no bracket, so there is no bracket error path.
///
/// # Notes
/// - Each iteration costs one evaluation plus
///   [`FiniteDifference::evaluations`]; on success `f_root` costs one more.
pub fn newton<T, F>(
    func: F,
    x0: T,
    cfg: NewtonCfg<T>
) -> Result<RootFindingReport<T>, NewtonError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let report = newton_loop(func, x0, cfg)?;
    report.log_termination();
    Ok(report)
}


fn newton_loop<T, F>(
    mut func: F,
    x0: T,
    cfg: NewtonCfg<T>
) -> Result<RootFindingReport<T>, NewtonError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let eps        = cfg.eps();
    let h          = cfg.step();
    let difference = cfg.difference();
    let num_iter   = ALGORITHM.iteration_bound::<T>(cfg.max_iter());
    let algo_name  = ALGORITHM.algorithm_name();

    let mut evals = 0;
    let mut eval  = |x: T| -> T { evals += 1; func(x) };

    let mut x = x0;
    for iter in 1..=num_iter {
        let fx = eval(x);
        if fx == T::zero() {
            return Ok(RootFindingReport::exact(x, iter, evals, Stencil::singleton(x), algo_name));
        }

        let dfx    = difference.estimate(&mut eval, x, fx, h);
        let x_next = x - fx / dfx;
        let step   = x_next - x;
        tracing::trace!(algorithm = algo_name, iter, x = %x, fx = %fx, dfx = %dfx, step = %step);

        if step_within(step, eps) {
            let stencil = Stencil::singleton(x);
            let f_root  = eval(x_next);
            return Ok(RootFindingReport {
                root                : x_next,
                f_root,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil,
                algorithm_name      : algo_name,
            });
        }
        x = x_next;
    }

    Ok(RootFindingReport::exhausted(num_iter, evals, Stencil::singleton(x), algo_name))
}
