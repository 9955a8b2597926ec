//! Forward Euler integration of `dx/dt = g(t, x)`.
//!
//! Steps a scalar state forward with a fixed step size:
//!
//! ```text
//! x_{k+1} = x_k + g(t_k, x_k) * dt
//! ```
//!
//! # Example
//!
//! ```
//! use numeric_roots::ode::euler::{euler_unobserved, EulerCfg};
//!
//! let cfg = EulerCfg::new().set_dt(0.5).unwrap();
//! let trajectory = euler_unobserved(|t, _x| 2.0 - 0.2 * t, 0.0, 5.0, 5.0, cfg).unwrap();
//!
//! assert_eq!(trajectory.steps(), 10);
//! assert!((trajectory.final_state() - 12.75).abs() < 1e-12);
//! ```

use log::debug;
use thiserror::Error;

use crate::console::Reporter;
use crate::observe::Observer;


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EulerError {
    #[error("invalid step size: dt must be finite and > 0. got {dt}")]
    InvalidStep { dt: f64 },

    #[error("invalid time span: need finite t0 <= t_end. got [{t0}, {t_end}]")]
    InvalidSpan { t0: f64, t_end: f64 },

    #[error("invalid initial state: x0={x0} must be finite")]
    InvalidState { x0: f64 },

    #[error("too many steps: (t_end - t0) / dt = {steps}, at most {max} allowed")]
    TooManySteps { steps: f64, max: usize },

    #[error("state non-finite at step {step}: t={t}, x={x}")]
    NonFiniteState { step: usize, t: f64, x: f64 },
}


/// Euler configuration.
///
/// # Defaults
/// ┌ `dt`      = 1e-4
/// └ `verbose` = true (used by [`euler_printed`])
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EulerCfg {
    dt: f64,
    verbose: bool,
}
impl EulerCfg {
    pub const DEFAULT_DT: f64 = 1e-4;

    /// Largest step count a single run may take.
    pub const MAX_STEPS: usize = 10_000_000;

    #[must_use]
    pub fn new() -> Self {
        Self { dt: Self::DEFAULT_DT, verbose: true }
    }

    pub fn set_dt(mut self, v: f64) -> Result<Self, EulerError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(EulerError::InvalidStep { dt: v });
        }
        self.dt = v;
        Ok(self)
    }

    #[must_use]
    pub fn set_verbose(mut self, v: bool) -> Self { self.verbose = v; self }

    #[inline] #[must_use] pub fn dt(&self)      -> f64  { self.dt }
    #[inline] #[must_use] pub fn verbose(&self) -> bool { self.verbose }
}
impl Default for EulerCfg {
    fn default() -> Self { Self::new() }
}


/// State emitted at every grid point, including `t0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Event {
    pub step: usize,
    pub t: f64,
    pub x: f64,
}


/// States at `t_k = t0 + k * dt`, `k = 0..=steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<f64>,
}
impl Trajectory {
    pub fn times(&self)  -> &[f64] { &self.times }
    pub fn states(&self) -> &[f64] { &self.states }

    /// Number of Euler steps taken.
    pub fn steps(&self) -> usize { self.states.len() - 1 }

    /// State at the last grid point.
    pub fn final_state(&self) -> f64 {
        self.states[self.states.len() - 1]
    }
}


/// Integrates `dx/dt = deriv(t, x)` from `(t0, x0)` to `t_end` and prints
/// `t=..., x=...` for every grid point when `cfg.verbose` is set.
pub fn euler_printed<G>(
    deriv: G,
    t0: f64,
    x0: f64,
    t_end: f64,
    cfg: EulerCfg,
) -> Result<Trajectory, EulerError>
where G: FnMut(f64, f64) -> f64 {
    let mut reporter = Reporter::stdout(cfg.verbose(), false);
    euler(deriv, t0, x0, t_end, cfg, &mut reporter)
}


/// Same as [`euler`] with no observer attached.
pub fn euler_unobserved<G>(
    deriv: G,
    t0: f64,
    x0: f64,
    t_end: f64,
    cfg: EulerCfg,
) -> Result<Trajectory, EulerError>
where G: FnMut(f64, f64) -> f64 {
    euler(deriv, t0, x0, t_end, cfg, &mut ())
}


/// Integrates `dx/dt = deriv(t, x)` with forward Euler.
///
/// # Algorithm
/// ┌ `steps = round((t_end - t0) / dt)`
/// ├ for `k` in `0..=steps`: emit [`Event`] for `(t_k, x_k)`, `t_k = t0 + k * dt`
/// └ for `k < steps`: `x_{k+1} = x_k + deriv(t_k, x_k) * dt`
///
/// The step size is never adapted; when `dt` does not divide the span the
/// last grid point lands within `dt / 2` of `t_end`.
///
/// # Errors
/// ┌ [`EulerError::InvalidSpan`]    - `t0`/`t_end` non-finite or `t_end < t0`.
/// ├ [`EulerError::InvalidState`]   - `x0` non-finite.
/// ├ [`EulerError::TooManySteps`]   - more than [`EulerCfg::MAX_STEPS`] steps.
/// └ [`EulerError::NonFiniteState`] - the state overflowed or became NaN.
pub fn euler<G, O>(
    mut deriv: G,
    t0: f64,
    x0: f64,
    t_end: f64,
    cfg: EulerCfg,
    observer: &mut O,
) -> Result<Trajectory, EulerError>
where
    G: FnMut(f64, f64) -> f64,
    O: Observer<Event> + ?Sized,
{
    if !(t0.is_finite() && t_end.is_finite()) || t_end < t0 {
        return Err(EulerError::InvalidSpan { t0, t_end });
    }
    if !x0.is_finite() {
        return Err(EulerError::InvalidState { x0 });
    }

    let dt    = cfg.dt();
    let exact = ((t_end - t0) / dt).round();
    if !exact.is_finite() || exact > EulerCfg::MAX_STEPS as f64 {
        return Err(EulerError::TooManySteps { steps: exact, max: EulerCfg::MAX_STEPS });
    }
    let steps = exact as usize;
    debug!("euler: {steps} steps of dt={dt} on [{t0}, {t_end}]");

    let mut times  = Vec::with_capacity(steps + 1);
    let mut states = Vec::with_capacity(steps + 1);

    let mut x = x0;
    for step in 0..=steps {
        let t = t0 + step as f64 * dt;
        observer.observe(&Event { step, t, x });
        times.push(t);
        states.push(x);

        if step < steps {
            x += deriv(t, x) * dt;
            if !x.is_finite() {
                return Err(EulerError::NonFiniteState { step: step + 1, t: t + dt, x });
            }
        }
    }

    Ok(Trajectory { times, states })
}
