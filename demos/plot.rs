//! Plots a function, lists its sign changes and solves on the first one.
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- -3 3
//! ```

use std::error::Error;

use numeric_roots::plotting::{plot, sample, DEFAULT_SAMPLES};
use numeric_roots::root_finding::{regula_falsi, RegulaFalsiCfg};

fn f(x: f64) -> f64 {
    x.powi(3) - x - 2.0
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1).map(|s| s.parse::<f64>());
    let lo = args.next().transpose()?.unwrap_or(0.0);
    let hi = args.next().transpose()?.unwrap_or(3.0);

    let brackets = sample(f, lo, hi, DEFAULT_SAMPLES)?.sign_changes();
    println!("sign changes on [{lo}, {hi}]: {brackets:?}");

    if let Some(&[a, b]) = brackets.first() {
        if a < b {
            regula_falsi(f, a, b, RegulaFalsiCfg::new())?;
        }
    }

    plot(f, lo, hi, DEFAULT_SAMPLES)?;
    Ok(())
}
