//! Sampled function values over an interval.

use log::debug;

use crate::plotting::errors::PlotError;
use crate::root_finding::signs::opposite_sign;

/// Default number of samples for [`sample`].
pub const DEFAULT_SAMPLES: usize = 1000;


/// `num` evenly spaced points from `lo` to `hi`, both included.
///
/// # Errors
/// ├ [`PlotError::InvalidBounds`] - `lo`/`hi` non-finite, `lo >= hi`, or `hi - lo` overflows
/// └ [`PlotError::TooFewSamples`] - `num < 2`
pub fn linspace(lo: f64, hi: f64, num: usize) -> Result<Vec<f64>, PlotError> {
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi || !(hi - lo).is_finite() {
        return Err(PlotError::InvalidBounds { lo, hi });
    }
    if num < 2 {
        return Err(PlotError::TooFewSamples { got: num });
    }

    let last = (num - 1) as f64;
    let mut xs: Vec<f64> = (0..num)
        .map(|i| lo + (hi - lo) * (i as f64 / last))
        .collect();
    xs[num - 1] = hi;
    Ok(xs)
}


/// Samples of `f` at increasing `x`.
///
/// Non-finite `f(x)` values are kept as-is; consumers skip them.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Finite `(x, y)` pairs.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| (x, y))
            .filter(|(_, y)| y.is_finite())
    }

    /// Candidate brackets for a root.
    ///
    /// ├ `[x_i, x_{i+1}]` where `f` strictly changes sign between samples
    /// └ `[x_i, x_i]`     where a sample hits `f(x_i) == 0.0` exactly
    ///
    /// Pairs involving a non-finite sample are skipped.
    pub fn sign_changes(&self) -> Vec<[f64; 2]> {
        let mut brackets = Vec::new();
        for (i, (&x, &y)) in self.xs.iter().zip(&self.ys).enumerate() {
            if y == 0.0 {
                brackets.push([x, x]);
                continue;
            }
            if let (Some(&x_next), Some(&y_next)) = (self.xs.get(i + 1), self.ys.get(i + 1)) {
                if y.is_finite() && y_next.is_finite() && opposite_sign(y, y_next) {
                    brackets.push([x, x_next]);
                }
            }
        }
        brackets
    }
}


/// Samples `f` at `num` evenly spaced points of `[lo, hi]`.
///
/// # Errors
/// Same as [`linspace`].
pub fn sample<F>(mut f: F, lo: f64, hi: f64, num: usize) -> Result<Series, PlotError>
where F: FnMut(f64) -> f64 {
    let xs = linspace(lo, hi, num)?;
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

    let non_finite = ys.iter().filter(|y| !y.is_finite()).count();
    debug!("sampled {num} points on [{lo}, {hi}], {non_finite} non-finite");

    Ok(Series { xs, ys })
}
