//! Regula falsi (false position) method

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

const ALGORITHM: Algorithm = Algorithm::RegulaFalsi;


#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("interval does not bracket a root: f({a})={fa:.2}, f({b})={fb:.2}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("degenerate false-position step on [{a}, {b}]: f(b) - f(a) = {fb} - {fa}")]
    DegenerateInterpolation { a: f64, b: f64, fa: f64, fb: f64 },
}


/// RegulaFalsi configuration.
///
/// # Defaults
/// ┌ `tolerance`    = 1e-4
/// ├ `max_iter`     = 50
/// ├ `verbose`      = true
/// └ `trace_errors` = false
///
/// # Notes
/// └ The stopping test is on `|b - a|`. When one endpoint stays fixed the
///   width stalls above the root's true error, so `max_iter` is often what
///   ends the search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(RegulaFalsiCfg);


/// x-intercept of the line through `(a, fa)` and `(b, fb)`:
///
/// `p = a - fa * (b - a) / (fb - fa)`
///
/// # Returns
/// ├ `Ok(p)` if `fb - fa` is a finite non-zero denominator and `p` is finite
/// └ `Err(DegenerateInterpolation)` otherwise
#[inline]
fn false_position(bracket: &Endpoints) -> Result<f64, RegulaFalsiError> {
    let Endpoints { a, fa, b, fb } = *bracket;
    let denom = fb - fa;
    let p     = a - fa * (b - a) / denom;

    if denom == 0.0 || !denom.is_finite() || !p.is_finite() {
        return Err(RegulaFalsiError::DegenerateInterpolation { a, b, fa, fb });
    }

    Ok(p)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi)
/// and prints progress to stdout as configured by `cfg.verbose` and
/// `cfg.trace_errors`.
///
/// See [`regula_falsi_observed`] for the algorithm, returns and errors.
pub fn regula_falsi<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg
) -> Result<RootFindingReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    let mut reporter = Reporter::stdout(cfg.verbose(), cfg.trace_errors());
    regula_falsi_observed(func, a, b, cfg, &mut reporter)
}


/// Finds a root of a function using the regula falsi method, reporting
/// each iteration to `observer`.
///
/// Identical to [`bisection_observed`](super::bisection::bisection_observed)
/// except that the interior point is the false position
/// `p = a - f(a) (b - a) / (f(b) - f(a))` instead of the midpoint.
///
/// # Notes
/// └ One endpoint can remain fixed for many iterations (e.g. convex `f`).
///   The recorded error `|b - a|` then converges to the distance between
///   the fixed endpoint and the root, not to zero.
///
/// # Errors
/// ┌ [`RegulaFalsiError::InvalidBounds`]           - `a` or `b` is NaN/inf.
/// ├ [`RegulaFalsiError::InvalidBracket`]          - `func(a) * func(b)` is not `< 0`; no iteration runs.
/// ├ [`RegulaFalsiError::DegenerateInterpolation`] - `f(b) - f(a)` vanished or overflowed mid-iteration.
/// └ [`RegulaFalsiError::RootFinding`]             - `func(x)` produced NaN/inf.
pub fn regula_falsi_observed<F, O>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg,
    observer: &mut O,
) -> Result<RootFindingReport, RegulaFalsiError>
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
) -> Result<RootFindingReport, RegulaFalsiError>
where
    F: FnMut(f64) -> f64,
    O: for<'a> Observer<Event<'a>> + ?Sized,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }

    let mut evals = 0;
    let bracket = Endpoints::evaluate(func, a, b, &mut evals)?;
    if !bracket.has_sign_change() {
        debug!("{ALGORITHM}: no sign change on [{a}, {b}]");
        return Err(RegulaFalsiError::InvalidBracket { a, b, fa: bracket.fa, fb: bracket.fb });
    }

    narrow(ALGORITHM, func, bracket, cfg, false_position, observer, errors, &mut evals)
}
