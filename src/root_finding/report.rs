//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

use super::real::Real;


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    ExactRoot,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection, brent
///     - remaining bracket half-width within tolerance
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - regula falsi, secant, newton
///     - |x_n - x_{n-1}| < eps
/// - [`ToleranceSatisfied::ExactZero`]
///     - All methods
///     - f(x) == 0 exactly
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - iteration bound exhausted, alongside [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    WidthTolReached,
    StepSizeReached,
    ExactZero,
    ToleranceNotReached,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval, ordered low to high
/// - [`Stencil::Open`]    : open methods
///     - `x` = last iterates used to compute the root
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil<T> {
    Bracket { bounds: [T; 2] },
    Open    { x: [T; 2], len: usize },
}
impl<T: Real> Stencil<T> {
    pub fn stencil(&self) -> &[T] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    /// Bracket stencil from two endpoints in any order.
    pub fn bracket(x1: T, x2: T) -> Self {
        Stencil::Bracket { bounds: [x1.min(x2), x1.max(x2)] }
    }
    pub fn singleton(x: T) -> Self {
        Stencil::Open { x: [x, T::zero()], len: 1 }
    }
    pub fn doubleton(x1: T, x2: T) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
    /// Width of a bracket stencil, `None` for open stencils.
    pub fn width(&self) -> Option<T> {
        match self {
            Stencil::Bracket { bounds: [lo, hi] } => Some(*hi - *lo),
            Stencil::Open { .. }                  => None,
        }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate, NaN if the bound was exhausted
/// - `f_root`              : function value at `root`, NaN if the bound was exhausted
/// - `iterations`          : total iterations
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : last set of points used in update formula
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport<T> {
    pub root                : T,
    pub f_root              : T,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil<T>,
    pub algorithm_name      : &'static str,
}

impl<T: Real> RootFindingReport<T> {
    /// Report for a bound exhausted without meeting the convergence test.
    pub(crate) fn exhausted(
        iterations     : usize,
        evaluations    : usize,
        stencil        : Stencil<T>,
        algorithm_name : &'static str,
    ) -> Self {
        Self {
            root                : T::nan(),
            f_root              : T::nan(),
            iterations,
            evaluations,
            termination_reason  : TerminationReason::IterationLimit,
            tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
            stencil,
            algorithm_name,
        }
    }

    /// Report for an evaluation hitting exactly zero.
    pub(crate) fn exact(
        root           : T,
        iterations     : usize,
        evaluations    : usize,
        stencil        : Stencil<T>,
        algorithm_name : &'static str,
    ) -> Self {
        Self {
            root,
            f_root              : T::zero(),
            iterations,
            evaluations,
            termination_reason  : TerminationReason::ExactRoot,
            tolerance_satisfied : ToleranceSatisfied::ExactZero,
            stencil,
            algorithm_name,
        }
    }

    /// `true` unless the iteration bound was exhausted.
    pub fn is_converged(&self) -> bool {
        self.termination_reason != TerminationReason::IterationLimit
    }

    /// The root, or NaN on non-convergence.
    pub fn root_or_nan(&self) -> T {
        if self.is_converged() { self.root } else { T::nan() }
    }

    pub(crate) fn log_termination(&self) {
        tracing::debug!(
            algorithm   = self.algorithm_name,
            reason      = ?self.termination_reason,
            tolerance   = ?self.tolerance_satisfied,
            root        = %self.root,
            iterations  = self.iterations,
            evaluations = self.evaluations,
            "root finding finished"
        );
    }
}
