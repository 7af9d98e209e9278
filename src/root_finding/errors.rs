//! Root-finding error types.
//!
//! ┌ [`ToleranceError`]   : invalid convergence tolerance `eps`
//! │
//! ├ [`RootFindingError`] : invalid global parameters (e.g. max_iter)
//! │
//! └ [`BracketError`]     : invalid bracket for closed methods
//!     ├ reversed or non-finite bounds
//!     └ no sign change across the bracket
//!
//! Running out of iterations is *not* an error: solvers report it through
//! [`crate::root_finding::report::TerminationReason::IterationLimit`] with a
//! NaN root.

use thiserror::Error;


/// Tolerance configuration errors.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `eps` tolerance: must be finite and > 0. got {got}")]
    InvalidEps { got: f64 },
}


/// Root-finding configuration errors.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Invalid bracket for a closed method.
///
/// Raised after the two endpoint evaluations, before any iteration.
#[derive(Debug, Error, PartialEq)]
pub enum BracketError {
    #[error("invalid bounds: xl and xu must be finite with xl <= xu. got [{xl}, {xu}]")]
    Reversed { xl: f64, xu: f64 },

    #[error("no sign change on [{xl}, {xu}]: f(xl)={fxl}, f(xu)={fxu}")]
    NoSignChange { xl: f64, xu: f64, fxl: f64, fxu: f64 },
}
