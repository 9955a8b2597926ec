//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

use super::algorithms::Algorithm;


/// Reasons a root-finding algorithm may terminate.
/// - [`TerminationReason::ExactRoot`]
///     - `f(p) == 0.0` exactly at the latest iterate `p`
/// - [`TerminationReason::ToleranceReached`]
///     - bracketing : `|b - a| < tolerance` after narrowing
///     - open       : `|x_n - x_{n-1}| < tolerance`
/// - [`TerminationReason::IterationLimit`]
///     - `max_iter` exhausted, no root found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ExactRoot,
    ToleranceReached,
    IterationLimit,
}


/// The last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval `[a, b]`
/// - [`Stencil::Open`]    : open methods
///     - `x` = iterate the final estimate was computed from
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: f64 },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x }         => std::slice::from_ref(x),
        }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : latest estimate (the root, unless `IterationLimit`)
/// - `f_root`             : function value at `root`
/// - `iterations`         : iterations performed
/// - `evaluations`        : total function (and derivative) evaluations
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `stencil`            : last set of points used in update formula
/// - `errors`             : absolute error recorded by each iteration
/// - `algorithm_name`     : algorithm name (e.g. `"bisection"`)
///
/// `errors.len() == iterations` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root               : f64,
    pub f_root             : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub stencil            : Stencil,
    pub errors             : Vec<f64>,
    pub algorithm_name     : &'static str,
}

impl RootFindingReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        (root, f_root): (f64, f64),
        stencil: Stencil,
        errors: Vec<f64>,
        evaluations: usize,
        termination_reason: TerminationReason,
    ) -> Self {
        Self {
            root,
            f_root,
            iterations: errors.len(),
            evaluations,
            termination_reason,
            stencil,
            errors,
            algorithm_name: algorithm.algorithm_name(),
        }
    }

    /// `true` unless the iteration budget ran out.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination_reason != TerminationReason::IterationLimit
    }

    /// `Some(root)` when a root was found, `None` if the iterations
    /// were exhausted.
    #[must_use]
    pub fn solution(&self) -> Option<f64> {
        self.converged().then_some(self.root)
    }

    /// Final absolute error, if any iteration ran.
    #[must_use]
    pub fn last_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}
