use super::algorithms::{Algorithm, CompoundFamily};
use super::bracket::validate_bracket;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{BracketError, RootFindingError, ToleranceError};
use super::real::Real;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::{same_sign, sign};
use super::tolerances::brent_tol;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Compound(CompoundFamily::Brent);


#[derive(Debug, Error)]
pub enum BrentError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    InvalidBracket(#[from] BracketError),
}


/// Brent's Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `eps` and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, the bound is [`Real::DIGITS`] iterations.
#[derive(Debug, Copy, Clone)]
pub struct BrentCfg<T: Real> {
    common: CommonCfg<T>,
}
impl<T: Real> BrentCfg<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(BrentCfg);


/// Finds a root in `[xl, xu]` by Brent's method, returning the root or NaN.
///
/// # Errors
/// - See [`brent`].
pub fn solve<T, F>(func: F, xl: T, xu: T, eps: T) -> Result<T, BrentError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let cfg = BrentCfg::new().set_eps(eps)?;
    Ok(brent(func, xl, xu, cfg)?.root)
}


/// Iteration state: `b` is the best estimate, `a` the previous best and `c`
/// the contrapoint, so that the root stays between `b` and `c`.
///
/// `d` is the last step and `e` the step before it; a bisection sets both
/// to the half-width, which disables interpolation acceptance against a
/// tiny previous step.
#[derive(Debug, Copy, Clone)]
struct Brackets<T> {
    a: T, fa: T,
    b: T, fb: T,
    c: T, fc: T,
    d: T,
    e: T,
}

impl<T: Real> Brackets<T> {
    /// Restores the invariants after a new `b` was evaluated:
    /// `f(b)`, `f(c)` of opposite sign and `|f(b)| <= |f(c)|`.
    fn rebracket(&mut self) {
        if same_sign(self.fb, self.fc) {
            self.c  = self.a;
            self.fc = self.fa;
            self.d  = self.b - self.a;
            self.e  = self.d;
        }
        if self.fc.abs() < self.fb.abs() {
            self.a  = self.b;
            self.b  = self.c;
            self.c  = self.a;
            self.fa = self.fb;
            self.fb = self.fc;
            self.fc = self.fa;
        }
    }

    /// Interpolated step `p / q` (inverse quadratic when `a != c`, secant
    /// otherwise), or `None` if Brent's acceptance test rejects it.
    ///
    /// The step must stay within three quarters of the bracket
    /// (`2p < 3·xm·q - |tol1·q|`) and be less than half the step before
    /// last (`2p < |e·q|`).
    fn interpolate(&self, xm: T, tol1: T) -> Option<T> {
        let (a, fa, b, fb, c, fc) = (self.a, self.fa, self.b, self.fb, self.c, self.fc);
        let two   = T::two();
        let three = two + T::one();

        let s = fb / fa;
        let (mut p, mut q) = if a == c {
            // secant
            (two * xm * s, T::one() - s)
        } else {
            // inverse quadratic interpolation
            let qq = fa / fc;
            let r  = fb / fc;
            (
                s * (two * xm * qq * (qq - r) - (b - a) * (r - T::one())),
                (qq - T::one()) * (r - T::one()) * (s - T::one()),
            )
        };
        if p > T::zero() {
            q = -q;
        }
        p = p.abs();

        let min1 = three * xm * q - (tol1 * q).abs();
        let min2 = (self.e * q).abs();
        if two * p < min1.min(min2) {
            Some(p / q)
        } else {
            None
        }
    }
}


/// Finds a root using [Brent's method](https://en.wikipedia.org/wiki/Brent%27s_method)
/// (bisection + secant + inverse quadratic interpolation).
///
/// This method assumes that the function is continuous on the interval `[xl, xu]`
/// and that `f(xl)` and `f(xu)` do not share a sign.
///
/// # Arguments
/// - `func` : function to evaluate
/// - `xl`   : lower bound of the initial bracket (finite)
/// - `xu`   : upper bound of the initial bracket (finite, `>= xl`)
/// - `cfg`  : [`BrentCfg`] (`eps`, optional max_iter)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : final best estimate `b`, NaN if the bound was exhausted
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : [`ToleranceSatisfied::WidthTolReached`] once
///                           `|c - b| / 2 <= 2·eps·|b| + eps/2`
/// - `stencil`             : bracket `(b, c)` at termination
/// - `algorithm_name`      : "brent"
///
/// # Errors
/// - [`BrentError::InvalidBracket`] : reversed/non-finite bounds or no sign change
/// - [`BrentError::Tolerance`]      : invalid `eps`
///
/// # Notes
/// - Every accepted step lands strictly inside the current bracket, so the
///   bracket width never grows and always contains a sign change.
/// - Interpolation is only accepted while it shrinks the bracket at least as
///   fast as bisection would over two steps; otherwise the step bisects.
/// - Steps shorter than the tolerance are stretched to the tolerance.
pub fn brent<T, F>(
    func: F,
    xl: T,
    xu: T,
    cfg: BrentCfg<T>
) -> Result<RootFindingReport<T>, BrentError>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let report = brent_loop(func, xl, xu, cfg)?;
    report.log_termination();
    Ok(report)
}


fn brent_loop<T, F>(
    mut func: F,
    xl: T,
    xu: T,
    cfg: BrentCfg<T>
) -> Result<RootFindingReport<T>, BrentError>
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

    let fa = eval(xl);
    let fb = eval(xu);
    validate_bracket(xl, xu, fa, fb)?;

    // early exit: a bound is a root
    if fa == T::zero() {
        return Ok(RootFindingReport::exact(xl, 0, evals, Stencil::bracket(xl, xu), algo_name));
    }
    if fb == T::zero() {
        return Ok(RootFindingReport::exact(xu, 0, evals, Stencil::bracket(xl, xu), algo_name));
    }

    // c starts on b, so the first rebracket pulls it to a
    let mut s = Brackets {
        a: xl, fa,
        b: xu, fb,
        c: xu, fc: fb,
        d: xu - xl,
        e: xu - xl,
    };

    for iter in 1..=num_iter {
        s.rebracket();

        let tol1 = brent_tol(s.b, eps);
        let xm   = T::half() * (s.c - s.b);
        tracing::trace!(algorithm = algo_name, iter, b = %s.b, fb = %s.fb, c = %s.c, tol = %tol1);

        if s.fb == T::zero() {
            return Ok(RootFindingReport::exact(s.b, iter, evals, Stencil::bracket(s.b, s.c), algo_name));
        }
        if xm.abs() <= tol1 {
            return Ok(RootFindingReport {
                root                : s.b,
                f_root              : s.fb,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
                stencil             : Stencil::bracket(s.b, s.c),
                algorithm_name      : algo_name,
            });
        }

        let interpolated = if s.e.abs() >= tol1 && s.fa.abs() > s.fb.abs() {
            s.interpolate(xm, tol1)
        } else {
            None
        };
        match interpolated {
            Some(step) => {
                s.e = s.d;
                s.d = step;
            }
            None => {
                // bisection
                s.d = xm;
                s.e = s.d;
            }
        }

        s.a  = s.b;
        s.fa = s.fb;
        if s.d.abs() > tol1 {
            s.b = s.b + s.d;
        } else {
            s.b = s.b + tol1 * sign(xm);
        }
        s.fb = eval(s.b);
    }

    // leave the reported bracket consistent with the last evaluation
    s.rebracket();
    Ok(RootFindingReport::exhausted(num_iter, evals, Stencil::bracket(s.b, s.c), algo_name))
}
