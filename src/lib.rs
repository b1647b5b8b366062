//! Public-facing crate root – re-exports.
//!
//! Three helpers for preparing plots: the fixed palette ([`colour`]), the global
//! chart style table ([`set_style`], [`rc`]) and histogram binning ([`histogram`]).

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, Rgb, colorize},
    config::{ChartConfig, ChartConfigBuilder},
    error::{
        ColorError, HistogramError, PaletteError, ParseError, PlotError, RenderError, StyleError,
    },
    histogram::{BinScale, BinSpec, BinWidth, Histogram, HistogramOptions, histogram},
    palette::{PALETTE, colour, colour_wrapping},
    rc::{self, RcParams, RcValue, set_style},
    style::{LineStyle, Marker, PropCycle, StyleOverrides, StyleParams, TickDirection},
};

pub use render::render_histogram;
