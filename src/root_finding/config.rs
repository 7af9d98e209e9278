//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the convergence tolerance and optional
//! iteration cap used by all root-finding configs.
//!
//! [`CommonCfg`] : universal fields
//! ├ `eps`      : absolute step/width tolerance
//! └ `max_iter` : iteration cap (optional)
//!
//! Setters are generated per config type by `impl_common_cfg!` and validate
//! their input, so a built config is always usable.

use super::real::Real;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<T: Real> {
    eps:      T,
    max_iter: Option<usize>,
}

impl<T: Real> CommonCfg<T> {
    /// Default tolerance is `sqrt(machine epsilon)` of `T`.
    pub fn new() -> Self {
        Self {
            eps      : T::epsilon().sqrt(),
            max_iter : None,
        }
    }

    // getters
    pub fn eps(&self)      -> T             { self.eps }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_eps      (&mut self, v: T)     { self.eps      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

/// Validates a caller-supplied tolerance.
pub(crate) fn check_eps<T: Real>(
    eps: T
) -> Result<T, super::errors::ToleranceError> {
    if !eps.is_finite() || eps <= T::zero() {
        return Err(super::errors::ToleranceError::InvalidEps { got: eps.as_f64() });
    }
    Ok(eps)
}

macro_rules! impl_common_cfg {
    ($cfg:ident) => {
        impl<T: $crate::root_finding::real::Real> $cfg<T> {
            pub fn set_eps(
                mut self, v: T
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let v = $crate::root_finding::config::check_eps(v)?;
                self.common.with_eps(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn eps(&self) -> T { self.common.eps() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }

        impl<T: $crate::root_finding::real::Real> Default for $cfg<T> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
