//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the iteration bound each method falls back to when no explicit
//! `max_iter` is configured.

use super::real::Real;


/// Fixed iteration cap for Newton-Raphson.
///
/// Newton converges quadratically near simple roots, so its cap is not tied
/// to the precision of the numeric type. It only bounds the failure modes
/// (e.g. a vanishing derivative).
pub const NEWTON_MAX_ITER: usize = 100;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`]  : bracketing methods, need a sign change
/// - [`Algorithm::Open`]     : open methods, start from guesses
/// - [`Algorithm::Compound`] : bracketing hybrids
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
    Compound(CompoundFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsiIllinois,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompoundFamily {
    Brent,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - `None` means "bounded by the precision of the numeric type",
    ///   i.e. [`Real::DIGITS`] iterations.
    /// - Newton-Raphson uses the fixed [`NEWTON_MAX_ITER`] cap.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)           => None,
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois) => None,
            Algorithm::Open(OpenFamily::Secant)                    => None,
            Algorithm::Open(OpenFamily::Newton)                    => Some(NEWTON_MAX_ITER),
            Algorithm::Compound(CompoundFamily::Brent)             => None,
        }
    }

    /// Resolves the iteration bound for numeric type `T`.
    ///
    /// An explicit `max_iter` always wins; otherwise
    /// [`Algorithm::default_max_iter`] or [`Real::DIGITS`].
    pub fn iteration_bound<T: Real>(self, max_iter: Option<usize>) -> usize {
        max_iter
            .or(self.default_max_iter())
            .unwrap_or(T::DIGITS)
    }

    /// Whether the method requires a sign-changing bracket.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bracket(..) | Algorithm::Compound(..))
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)           => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois) => "regula_falsi_illinois",
            Algorithm::Open(OpenFamily::Secant)                    => "secant",
            Algorithm::Open(OpenFamily::Newton)                    => "newton_raphson",
            Algorithm::Compound(CompoundFamily::Brent)             => "brent",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
