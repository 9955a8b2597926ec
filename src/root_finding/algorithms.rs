//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared defaults every method starts from.


/// Default absolute-error tolerance between successive approximations.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default hard cap on iterations.
pub const DEFAULT_MAX_ITER: usize = 50;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`]     : bracketing, midpoint update
/// - [`Algorithm::RegulaFalsi`]   : bracketing, false-position update
/// - [`Algorithm::NewtonRaphson`] : open, derivative-based update
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    RegulaFalsi,
    NewtonRaphson,
}

impl Algorithm {
    /// `true` for methods that keep a sign-change bracket.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bisection | Algorithm::RegulaFalsi)
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection     => "bisection",
            Algorithm::RegulaFalsi   => "regula_falsi",
            Algorithm::NewtonRaphson => "newton_raphson",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
