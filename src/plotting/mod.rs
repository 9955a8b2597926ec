//! Function sampling and plotting.
//!
//! Used before calling a bracketing solver: sample `f` over an interval,
//! look at the plot or the sign-change list, pick `[a, b]`.
//!
//! ┌ [`series`] : `linspace`, sampling, sign-change brackets
//! ├ [`figure`] : curve and axes through the origin
//! └ `window`   : egui window (`plot` feature)

pub mod errors;
pub mod figure;
pub mod series;

#[cfg(feature = "plot")]
mod window;

pub use errors::PlotError;
pub use figure::{Axis, Figure};
pub use series::{linspace, sample, Series, DEFAULT_SAMPLES};

#[cfg(feature = "plot")]
pub use window::{plot, show};
