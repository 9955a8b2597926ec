//! Plot description of a sampled function.
//!
//! A [`Figure`] holds what gets drawn: the finite samples as a curve and the
//! two coordinate axes through the origin, each ending in an arrow tip at
//! the positive edge of the plotted range. It carries no drawing backend;
//! the `plot` feature renders it in a window.

use crate::plotting::errors::PlotError;
use crate::plotting::series::Series;


/// Axis segment drawn as an arrow from `tail` to `tip`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axis {
    pub tail: [f64; 2],
    pub tip:  [f64; 2],
}


/// Curve and axes for one function plot.
///
/// ┌ `curve`   : finite samples `[x, f(x)]`, in sampling order
/// ├ `x_range` : first and last sampled `x`
/// └ `y_range` : smallest and largest finite `f(x)`, widened by `0.5` on
///               each side for a flat function
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    curve:   Vec<[f64; 2]>,
    x_range: [f64; 2],
    y_range: [f64; 2],
}

impl Figure {
    /// # Errors
    /// └ [`PlotError::NoFiniteSamples`] - nothing to draw.
    pub fn new(series: &Series) -> Result<Self, PlotError> {
        let (x_min, x_max) = match (series.xs().first(), series.xs().last()) {
            (Some(&lo), Some(&hi)) if lo < hi => (lo, hi),
            _ => return Err(PlotError::NoFiniteSamples),
        };

        let curve: Vec<[f64; 2]> = series.finite_points().map(|(x, y)| [x, y]).collect();
        if curve.is_empty() {
            return Err(PlotError::NoFiniteSamples);
        }

        let (mut y_min, mut y_max) = curve
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p[1]), hi.max(p[1])));
        if y_min == y_max {
            y_min -= 0.5;
            y_max += 0.5;
        }

        Ok(Self { curve, x_range: [x_min, x_max], y_range: [y_min, y_max] })
    }

    pub fn curve(&self)   -> &[[f64; 2]] { &self.curve }
    pub fn x_range(&self) -> [f64; 2]    { self.x_range }
    pub fn y_range(&self) -> [f64; 2]    { self.y_range }

    /// `y = 0` across the x range, pointing right. `None` when `0` is
    /// outside the y range.
    pub fn x_axis(&self) -> Option<Axis> {
        let ([x_min, x_max], [y_min, y_max]) = (self.x_range, self.y_range);
        (y_min <= 0.0 && 0.0 <= y_max).then_some(Axis {
            tail : [x_min, 0.0],
            tip  : [x_max, 0.0],
        })
    }

    /// `x = 0` across the y range, pointing up. `None` when `0` is outside
    /// the x range.
    pub fn y_axis(&self) -> Option<Axis> {
        let ([x_min, x_max], [y_min, y_max]) = (self.x_range, self.y_range);
        (x_min <= 0.0 && 0.0 <= x_max).then_some(Axis {
            tail : [0.0, y_min],
            tip  : [0.0, y_max],
        })
    }

    /// Axes that fall inside the plotted ranges.
    pub fn axes(&self) -> impl Iterator<Item = Axis> {
        [self.x_axis(), self.y_axis()].into_iter().flatten()
    }
}
