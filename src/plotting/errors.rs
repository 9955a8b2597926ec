use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid bounds: lo and hi must be finite with lo < hi and hi - lo finite. got [{lo}, {hi}]")]
    InvalidBounds { lo: f64, hi: f64 },

    #[error("insufficient samples: got {got}, need at least 2")]
    TooFewSamples { got: usize },

    #[error("function is non-finite at every sample")]
    NoFiniteSamples,

    #[cfg(feature = "plot")]
    #[error("plot window failed: {0}")]
    Window(#[from] eframe::Error),
}
