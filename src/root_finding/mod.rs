//! Root-finding algorithms for `f(x) = 0`.
//!
//! Closed (bracketing) methods take `(f, xl, xu, eps)`:
//! ├ [`bisection`]
//! ├ [`regula_falsi`] (Illinois)
//! └ [`brent`]
//!
//! Open methods take one or two guesses:
//! ├ [`secant`] : `(f, x0, x1, eps)`
//! └ [`newton`] : `(f, x0, eps)`
//!
//! Every module exposes a `solve` function returning the root, or NaN when
//! the iteration bound is exhausted, and a full-report entry point driven
//! by a config struct. Invalid input is always reported through `Err`.

// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod real;
pub mod derivative;
pub(crate) mod config;
pub(crate) mod signs;
pub(crate) mod tolerances;
pub(crate) mod bracket;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod newton;
pub mod brent;

pub use real::Real;
pub use report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
