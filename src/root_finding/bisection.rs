//! Bisection method

use log::debug;
use thiserror::Error;

use crate::console::Reporter;
use crate::observe::Observer;
use super::algorithms::Algorithm;
use super::bracket::{narrow, Endpoints};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::event::{notify_outcome, Event};
use super::report::RootFindingReport;

const ALGORITHM: Algorithm = Algorithm::Bisection;


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("interval does not bracket a root: f({a})={fa:.2}, f({b})={fb:.2}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },
}


/// Bisection configuration.
///
/// # Defaults
/// ┌ `tolerance`    = 1e-4
/// ├ `max_iter`     = 50
/// ├ `verbose`      = true
/// └ `trace_errors` = false
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of `[a, b]`.
#[inline]
fn midpoint(bracket: &Endpoints) -> Result<f64, BisectionError> {
    Ok((bracket.a + bracket.b) / 2.0)
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method)
/// and prints progress to stdout as configured by `cfg.verbose` and
/// `cfg.trace_errors`.
///
/// See [`bisection_observed`] for the algorithm, returns and errors.
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {
    let mut reporter = Reporter::stdout(cfg.verbose(), cfg.trace_errors());
    bisection_observed(func, a, b, cfg, &mut reporter)
}


/// Finds a root of a function using the bisection method, reporting each
/// iteration to `observer`.
///
/// `func(a)` and `func(b)` must have strictly opposite signs. Endpoint order
/// does not matter.
///
/// # Algorithm
/// For up to `cfg.max_iter` iterations:
/// ┌ `p = (a + b) / 2`
/// ├ keep the half-interval that still brackets the sign change
/// ├ `f(p) == 0.0`           → [`TerminationReason::ExactRoot`]
/// └ `|b - a| < tolerance`   → [`TerminationReason::ToleranceReached`]
///
/// Running out of iterations is not an error: the report carries
/// [`TerminationReason::IterationLimit`] and [`RootFindingReport::solution`]
/// is `None`.
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`]  - `a` or `b` is NaN/inf.
/// ├ [`BisectionError::InvalidBracket`] - `func(a) * func(b)` is not `< 0`; no iteration runs.
/// └ [`BisectionError::RootFinding`]    - `func(x)` produced NaN/inf.
///
/// [`TerminationReason::ExactRoot`]: super::report::TerminationReason::ExactRoot
/// [`TerminationReason::ToleranceReached`]: super::report::TerminationReason::ToleranceReached
/// [`TerminationReason::IterationLimit`]: super::report::TerminationReason::IterationLimit
pub fn bisection_observed<F, O>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
    observer: &mut O,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
    O: for<'a> Observer<Event<'a>> + ?Sized,
{
    let mut errors = Vec::new();
    let result = solve(&mut func, a, b, &cfg.common, observer, &mut errors);
    notify_outcome(ALGORITHM, result, &errors, observer)
}


fn solve<F, O>(
    func: &mut F,
    a: f64,
    b: f64,
    cfg: &CommonCfg,
    observer: &mut O,
    errors: &mut Vec<f64>,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
    O: for<'a> Observer<Event<'a>> + ?Sized,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let mut evals  = 0;
    let bracket = Endpoints::evaluate(func, a, b, &mut evals)?;
    if !bracket.has_sign_change() {
        debug!("{ALGORITHM}: no sign change on [{a}, {b}]");
        return Err(BisectionError::InvalidBracket { a, b, fa: bracket.fa, fb: bracket.fb });
    }

    narrow(ALGORITHM, func, bracket, cfg, midpoint, observer, errors, &mut evals)
}
