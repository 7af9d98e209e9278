//! Scalar root-finding for continuous real functions of one variable.
//!
//! See [`root_finding`] for the available methods.

pub mod root_finding;
