//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Malformed colour literals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in `{0}`")]
    InvalidHexDigit(String),
    #[error("hex colour must be exactly 6 digits, got `{0}`")]
    InvalidHexLength(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette index {index} out of range (palette has {len} colours)")]
    OutOfRange { index: usize, len: usize },
}

/// Precise style configuration faults.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("class count must be between 1 and {max}, got {got}")]
    ClassCount { got: usize, max: usize },
    #[error("style setting `{field}` must be finite and non-negative, got {value}")]
    InvalidSize { field: &'static str, value: f64 },
    #[error("grid alpha must be within 0..=1, got {0}")]
    InvalidAlpha(f64),
    #[error("unknown {kind} `{text}`")]
    UnknownToken { kind: &'static str, text: String },
    #[error("reading style file: {0}")]
    Io(#[from] io::Error),
    #[error("style file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    #[error("Histogram cannot be computed: No valid data points.")]
    Empty,
    #[error("Logarithmic binning requires positive data values (minimum is {min}).")]
    NonPositive { min: f64 },
    #[error("data contains an infinite value at index {index}")]
    NonFinite { index: usize },
    #[error("bin count must be at least 1")]
    BinCount,
    #[error("bin width must be finite and positive, got {0}")]
    BinWidth(f64),
    #[error("{requested:.0} bins exceed the supported maximum")]
    TooManyBins { requested: f64 },
    #[error("logarithmic binning needs distinct extrema, all samples equal {0}")]
    DegenerateRange(f64),
}

/// Failure while reading numeric samples.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("expected at least {want} columns, got {got}")]
    MissingColumn { want: usize, got: usize },
    #[error("invalid number '{0}'")]
    BadFloat(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    TooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    #[error("histogram has no bins")]
    NoBins,
}

/// Top-level error type bubbled up by the CLI.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}
