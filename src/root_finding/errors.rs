//! Root-finding error types shared by all solvers.
//!
//! [`RootFindingError`] : common runtime and configuration errors
//!  ├ non-finite function evaluation
//!  ├ invalid tolerance
//!  └ invalid iteration cap (`max_iter`)
//!
//! Solver-specific failures (invalid bracket, zero derivative, ...) live in
//! each solver module and wrap this type transparently.


use thiserror::Error;


/// Root-finding runtime and configuration errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Evaluates `func(x)`, counting the call and rejecting NaN/inf.
#[inline]
pub(crate) fn eval_checked<F>(
    func: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, RootFindingError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; func(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}
