//! Newton-Raphson method

use log::trace;
use thiserror::Error;

use crate::console::Reporter;
use crate::observe::Observer;
use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{eval_checked, RootFindingError};
use super::event::{notify_outcome, Event};
use super::report::{RootFindingReport, Stencil, TerminationReason};

const ALGORITHM: Algorithm = Algorithm::NewtonRaphson;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid seed: x0={x0} must be finite")]
    InvalidSeed { x0: f64 },

    #[error("solution not found: f'(x)=0 at x={x} (iteration {iteration})")]
    DerivativeZero { x: f64, iteration: usize },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}: f(x)={fx}, f'(x)={dfx}")]
    StepNotFinite { x: f64, fx: f64, dfx: f64 },
}


/// Newton-Raphson configuration.
///
/// # Defaults
/// ┌ `tolerance`    = 1e-4
/// ├ `max_iter`     = 50
/// ├ `verbose`      = true
/// └ `trace_errors` = false
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Evaluates the user-supplied derivative, rejecting zero and NaN/inf
/// before any division happens.
#[inline]
fn eval_dfx<G>(
    df: &mut G,
    x: f64,
    iteration: usize,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if dfx == 0.0 {
        return Err(NewtonError::DerivativeZero { x, iteration });
    }
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// and prints progress to stdout as configured by `cfg.verbose` and
/// `cfg.trace_errors`.
///
/// See [`newton_observed`] for the algorithm, returns and errors.
pub fn newton<F, G>(
    func: F,
    dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let mut reporter = Reporter::stdout(cfg.verbose(), cfg.trace_errors());
    newton_observed(func, dfunc, x0, cfg, &mut reporter)
}


/// Finds a root of `func` with the Newton-Raphson method from the seed
/// `x0`, reporting each iteration to `observer`.
///
/// `dfunc` is trusted to be the derivative of `func`; it is not verified.
///
/// # Algorithm
/// For up to `cfg.max_iter` iterations:
/// ┌ `f'(x) == 0.0`                → [`NewtonError::DerivativeZero`]
/// ├ `x_next = x - f(x) / f'(x)`, record `|x - x_next|`
/// ├ `f(x_next) == 0.0`            → [`TerminationReason::ExactRoot`]
/// └ `|x - x_next| < tolerance`    → [`TerminationReason::ToleranceReached`]
///
/// No bracket is kept. Divergence and cycling are bounded only by
/// `max_iter`, after which the report carries
/// [`TerminationReason::IterationLimit`].
///
/// # Errors
/// ┌ [`NewtonError::InvalidSeed`]         - `x0` is NaN/inf.
/// ├ [`NewtonError::DerivativeZero`]      - `dfunc(x) == 0.0` at the current iterate.
/// ├ [`NewtonError::DerivativeNotFinite`] - `dfunc(x)` produced NaN/inf.
/// ├ [`NewtonError::StepNotFinite`]       - `x - f(x)/f'(x)` overflowed.
/// └ [`NewtonError::RootFinding`]         - `func(x)` produced NaN/inf.
pub fn newton_observed<F, G, O>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
    observer: &mut O,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    O: for<'a> Observer<Event<'a>> + ?Sized,
{
    let mut errors = Vec::new();
    let result = solve(&mut func, &mut dfunc, x0, &cfg.common, observer, &mut errors);
    notify_outcome(ALGORITHM, result, &errors, observer)
}


fn solve<F, G, O>(
    func: &mut F,
    dfunc: &mut G,
    x0: f64,
    cfg: &CommonCfg,
    observer: &mut O,
    errors: &mut Vec<f64>,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    O: for<'a> Observer<Event<'a>> + ?Sized,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidSeed { x0 });
    }

    let tolerance = cfg.tolerance();
    let mut evals = 0;

    let mut x  = x0;
    let mut prev = x0;
    // f(x) carried over from the previous iteration
    let mut fx: Option<f64> = None;
    let mut x_next  = x0;      // gets overwritten
    let mut fx_next = f64::NAN; // gets overwritten

    for iter in 1..=cfg.max_iter() {
        let dfx = eval_dfx(dfunc, x, iter, &mut evals)?;
        let fx_cur = match fx {
            Some(v) => v,
            None    => eval_checked(func, x, &mut evals)?,
        };

        x_next = x - fx_cur / dfx;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, fx: fx_cur, dfx });
        }

        let e_abs = (x - x_next).abs();
        errors.push(e_abs);

        trace!("{ALGORITHM} iter {iter}: x={x}, x_next={x_next}, |dx|={e_abs}");
        observer.observe(&Event::Iteration {
            algorithm : ALGORITHM,
            iter,
            stencil   : Stencil::Open { x },
            estimate  : x_next,
        });

        fx_next = eval_checked(func, x_next, &mut evals)?;

        let reason = if fx_next == 0.0 {
            Some(TerminationReason::ExactRoot)
        } else if e_abs < tolerance {
            Some(TerminationReason::ToleranceReached)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Ok(RootFindingReport::new(
                ALGORITHM,
                (x_next, fx_next),
                Stencil::Open { x },
                std::mem::take(errors),
                evals,
                reason,
            ));
        }

        prev = x;
        x    = x_next;
        fx   = Some(fx_next);
    }

    Ok(RootFindingReport::new(
        ALGORITHM,
        (x_next, fx_next),
        Stencil::Open { x: prev },
        std::mem::take(errors),
        evals,
        TerminationReason::IterationLimit,
    ))
}
