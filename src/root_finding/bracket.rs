//! Iteration shared by the bracketing methods.
//!
//! Bisection and regula falsi differ only in how the interior point `p` of
//! `[a, b]` is chosen; the narrowing rule, the two success conditions and
//! the exhaustion outcome are identical.

use log::trace;

use crate::observe::Observer;
use super::algorithms::Algorithm;
use super::config::CommonCfg;
use super::errors::{eval_checked, RootFindingError};
use super::event::Event;
use super::report::{RootFindingReport, Stencil, TerminationReason};
use super::signs::opposite_sign;


/// Current bracket with its function values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Endpoints {
    pub a:  f64,
    pub fa: f64,
    pub b:  f64,
    pub fb: f64,
}

impl Endpoints {
    /// Evaluates both endpoints.
    pub(crate) fn evaluate<F>(
        func: &mut F,
        a: f64,
        b: f64,
        evals: &mut usize
    ) -> Result<Self, RootFindingError> where F: FnMut(f64) -> f64 {
        let fa = eval_checked(func, a, evals)?;
        let fb = eval_checked(func, b, evals)?;
        Ok(Self { a, fa, b, fb })
    }

    /// `f(a) * f(b) < 0`
    #[inline]
    pub(crate) fn has_sign_change(&self) -> bool {
        opposite_sign(self.fa, self.fb)
    }

    #[inline]
    fn stencil(&self) -> Stencil {
        Stencil::Bracket { bounds: [self.a, self.b] }
    }
}


/// Runs the bracketing iteration from a validated bracket.
///
/// Each iteration:
/// ┌ `p = interior(bracket)`, evaluate `f(p)`, emit [`Event::Iteration`]
/// ├ keep the half whose endpoints still change sign
/// │  ├ `f(a) * f(p) < 0` → `b = p`
/// │  └ otherwise         → `a = p`
/// ├ record `|b - a|`
/// └ stop on `f(p) == 0.0` (exact) or `|b - a| < tolerance`
///
/// The bracket invariant is re-established by the update rule and never
/// re-checked. Errors recorded so far are left in `errors` on failure.
pub(crate) fn narrow<F, P, O, E>(
    algorithm: Algorithm,
    func: &mut F,
    mut bracket: Endpoints,
    cfg: &CommonCfg,
    mut interior: P,
    observer: &mut O,
    errors: &mut Vec<f64>,
    evals: &mut usize,
) -> Result<RootFindingReport, E>
where
    F: FnMut(f64) -> f64,
    P: FnMut(&Endpoints) -> Result<f64, E>,
    O: for<'a> Observer<Event<'a>> + ?Sized,
    E: From<RootFindingError>,
{
    let tolerance = cfg.tolerance();

    let mut p  = bracket.a;     // gets overwritten
    let mut fp = bracket.fa;    // gets overwritten
    for iter in 1..=cfg.max_iter() {
        p  = interior(&bracket)?;
        fp = eval_checked(func, p, evals)?;

        trace!("{algorithm} iter {iter}: a={}, b={}, p={p}, f(p)={fp}", bracket.a, bracket.b);
        observer.observe(&Event::Iteration {
            algorithm,
            iter,
            stencil  : bracket.stencil(),
            estimate : p,
        });

        // shrink interval
        if opposite_sign(bracket.fa, fp) {
            bracket.b  = p;
            bracket.fb = fp;
        } else {
            bracket.a  = p;
            bracket.fa = fp;
        }

        let e_abs = (bracket.b - bracket.a).abs();
        errors.push(e_abs);

        let reason = if fp == 0.0 {
            Some(TerminationReason::ExactRoot)
        } else if e_abs < tolerance {
            Some(TerminationReason::ToleranceReached)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Ok(RootFindingReport::new(
                algorithm,
                (p, fp),
                bracket.stencil(),
                std::mem::take(errors),
                *evals,
                reason,
            ));
        }
    }

    Ok(RootFindingReport::new(
        algorithm,
        (p, fp),
        bracket.stencil(),
        std::mem::take(errors),
        *evals,
        TerminationReason::IterationLimit,
    ))
}
