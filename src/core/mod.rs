//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod histogram;
pub mod palette;
pub mod rc;
pub mod style;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, Rgb, colorize};
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{DEFAULT_CLASS_NUM, MIN_CHART_HEIGHT, MIN_CHART_WIDTH, PALETTE_LEN};
pub use error::{
    ColorError, HistogramError, PaletteError, ParseError, PlotError, RenderError, StyleError,
};
pub use histogram::{BinScale, BinSpec, BinWidth, Histogram, HistogramOptions, histogram};
pub use palette::{PALETTE, colour};
pub use rc::{RcParams, RcValue, set_style};
pub use style::{LineStyle, Marker, PropCycle, StyleOverrides, StyleParams, TickDirection};
