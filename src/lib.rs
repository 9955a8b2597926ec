//! Classical root-finding for scalar equations `f(x) = 0`.
//!
//! ┌ [`root_finding`] : bisection, regula falsi and Newton-Raphson
//! ├ [`observe`]      : observer side channel for solver events
//! ├ [`console`]      : console reporter for verbose/error-trace output
//! ├ [`plotting`]     : function sampling and plots for bracket selection
//! └ [`ode`]          : fixed-step forward Euler integration
//!
//! # Features
//!
//! - `plot`: enables `plotting::plot` and `plotting::show`, which open an
//!   egui window. Adds dependencies on `eframe` and `egui_plot`.

pub mod observe;
pub mod console;

pub mod root_finding;
pub mod plotting;
pub mod ode;
