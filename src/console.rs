//! Console rendering of solver events.
//!
//! [`Reporter`] is the observer the un-observed entry points attach. It
//! writes to any [`io::Write`] sink, so the same output can be captured in
//! tests by writing into a `Vec<u8>`.

use std::io::{self, Write};

use crate::observe::Observer;
use crate::ode::euler;
use crate::root_finding::event::Event;
use crate::root_finding::report::{Stencil, TerminationReason};


/// Writes per-iteration progress and termination messages.
///
/// ┌ `verbose`      : one line per iteration
/// └ `trace_errors` : the full error history on termination
///
/// Termination messages are always written. The first I/O error is kept
/// and returned by [`Reporter::into_inner`]; later writes are skipped.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    verbose: bool,
    trace_errors: bool,
    io_error: Option<io::Error>,
}

impl Reporter<io::Stdout> {
    #[must_use]
    pub fn stdout(verbose: bool, trace_errors: bool) -> Self {
        Self::new(io::stdout(), verbose, trace_errors)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbose: bool, trace_errors: bool) -> Self {
        Self { out, verbose, trace_errors, io_error: None }
    }

    /// Returns the sink, or the first write error encountered.
    pub fn into_inner(self) -> io::Result<W> {
        match self.io_error {
            Some(err) => Err(err),
            None      => Ok(self.out),
        }
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            self.io_error = Some(err);
        }
    }

    fn error_trace(&mut self, errors: &[f64]) {
        if self.trace_errors {
            self.line(format_args!("errors per iteration: {errors:?}"));
        }
    }
}

impl<'a, W: Write> Observer<Event<'a>> for Reporter<W> {
    fn observe(&mut self, event: &Event<'a>) {
        match event {
            Event::Iteration { iter, stencil, estimate, .. } => {
                if !self.verbose {
                    return;
                }
                let (i, prev) = (*iter, iter - 1);
                match stencil {
                    Stencil::Bracket { bounds: [a, b] } => self.line(format_args!(
                        "ite {i:<2}: a_{prev:<2} = {a:.4}, b_{prev:<2} = {b:.4}, p_{i:<2} = {estimate:.5}"
                    )),
                    Stencil::Open { x } => self.line(format_args!(
                        "ite {i:<2}: p_{prev:<2} = {x:.4}, p_{i:<2} = {estimate:.5}"
                    )),
                }
            }
            Event::Finished { algorithm, report } => {
                self.error_trace(&report.errors);
                match report.termination_reason {
                    TerminationReason::ExactRoot => {
                        self.line(format_args!("exact solution found"));
                    }
                    TerminationReason::ToleranceReached if algorithm.is_bracketing() => self.line(format_args!(
                        ">>> solution found after {} iterations: x->{:.15}",
                        report.iterations, report.root
                    )),
                    TerminationReason::ToleranceReached => {
                        self.line(format_args!("solution found"));
                    }
                    TerminationReason::IterationLimit => {
                        self.line(format_args!("solution not found, iterations exhausted"));
                    }
                }
            }
            Event::Failed { error, errors, .. } => {
                if !errors.is_empty() {
                    self.error_trace(errors);
                }
                self.line(format_args!("{error}"));
            }
        }
    }
}

impl<W: Write> Observer<euler::Event> for Reporter<W> {
    fn observe(&mut self, event: &euler::Event) {
        if self.verbose {
            self.line(format_args!("t={:.3}, x={:.3}", event.t, event.x));
        }
    }
}
