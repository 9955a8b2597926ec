// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod event;
pub(crate) mod config;
pub(crate) mod signs;
pub(crate) mod bracket;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod newton;

pub use bisection::{bisection, bisection_observed, BisectionCfg, BisectionError};
pub use regula_falsi::{regula_falsi, regula_falsi_observed, RegulaFalsiCfg, RegulaFalsiError};
pub use newton::{newton, newton_observed, NewtonCfg, NewtonError};
pub use report::{RootFindingReport, Stencil, TerminationReason};
pub use event::Event;
