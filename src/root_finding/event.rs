//! Events emitted by the root-finding solvers.

use std::error::Error as StdError;

use log::debug;

use crate::observe::Observer;

use super::algorithms::Algorithm;
use super::report::{RootFindingReport, Stencil};


/// Event emitted by a root-finding solver.
///
/// ┌ [`Event::Iteration`] : once per iteration, as soon as the new estimate is known
/// ├ [`Event::Finished`]  : the solver returned a report
/// └ [`Event::Failed`]    : the solver returned an error
#[derive(Debug)]
pub enum Event<'a> {
    Iteration {
        algorithm: Algorithm,
        /// Iteration counter (1-based).
        iter: usize,
        /// Bracket `[a, b]` or previous iterate the estimate came from.
        stencil: Stencil,
        /// New estimate `p_iter`.
        estimate: f64,
    },
    Finished {
        algorithm: Algorithm,
        report: &'a RootFindingReport,
    },
    Failed {
        algorithm: Algorithm,
        error: &'a (dyn StdError + 'static),
        /// Errors recorded before the failure.
        errors: &'a [f64],
    },
}

impl Event<'_> {
    /// Iteration counter for [`Event::Iteration`], total iterations for
    /// [`Event::Finished`], errors recorded so far for [`Event::Failed`].
    #[must_use]
    pub fn iterations(&self) -> usize {
        match self {
            Event::Iteration { iter, .. }  => *iter,
            Event::Finished { report, .. } => report.iterations,
            Event::Failed { errors, .. }   => errors.len(),
        }
    }
}


/// Emits the terminal event for a finished solve and passes the result on.
pub(crate) fn notify_outcome<O, E>(
    algorithm: Algorithm,
    result: Result<RootFindingReport, E>,
    errors: &[f64],
    observer: &mut O,
) -> Result<RootFindingReport, E>
where
    O: for<'a> Observer<Event<'a>> + ?Sized,
    E: StdError + 'static,
{
    match &result {
        Ok(report) => {
            debug!(
                "{algorithm}: {:?} after {} iterations, x={}",
                report.termination_reason, report.iterations, report.root
            );
            observer.observe(&Event::Finished { algorithm, report });
        }
        Err(error) => {
            debug!("{algorithm}: failed after {} iterations: {error}", errors.len());
            observer.observe(&Event::Failed { algorithm, error, errors });
        }
    }
    result
}
