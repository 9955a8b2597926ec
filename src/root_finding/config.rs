//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] : universal fields
//! ├ `tolerance`    : stopping threshold on the absolute error
//! ├ `max_iter`     : iteration cap
//! ├ `verbose`      : print one line per iteration
//! └ `trace_errors` : print the error history on termination
//!
//! `verbose` and `trace_errors` only drive the console reporter attached by
//! the un-observed entry points (e.g. [`super::bisection::bisection`]).


use super::algorithms::{DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance:    f64,
    max_iter:     usize,
    verbose:      bool,
    trace_errors: bool,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance    : DEFAULT_TOLERANCE,
            max_iter     : DEFAULT_MAX_ITER,
            verbose      : true,
            trace_errors : false,
        }
    }

    // getters
    pub fn tolerance(&self)    -> f64   { self.tolerance }
    pub fn max_iter(&self)     -> usize { self.max_iter }
    pub fn verbose(&self)      -> bool  { self.verbose }
    pub fn trace_errors(&self) -> bool  { self.trace_errors }

    // setters (internal)
    pub(crate) fn with_tolerance    (&mut self, v: f64)   { self.tolerance    = v; }
    pub(crate) fn with_max_iter     (&mut self, v: usize) { self.max_iter     = v; }
    pub(crate) fn with_verbose      (&mut self, v: bool)  { self.verbose      = v; }
    pub(crate) fn with_trace_errors (&mut self, v: bool)  { self.trace_errors = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
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
            #[must_use]
            pub fn set_verbose(mut self, v: bool) -> Self {
                self.common.with_verbose(v);
                self
            }
            #[must_use]
            pub fn set_trace_errors(mut self, v: bool) -> Self {
                self.common.with_trace_errors(v);
                self
            }

            #[inline] #[must_use] pub fn tolerance(&self)    -> f64   { self.common.tolerance() }
            #[inline] #[must_use] pub fn max_iter(&self)     -> usize { self.common.max_iter() }
            #[inline] #[must_use] pub fn verbose(&self)      -> bool  { self.common.verbose() }
            #[inline] #[must_use] pub fn trace_errors(&self) -> bool  { self.common.trace_errors() }
        }

        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
