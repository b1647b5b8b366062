//! A collection of constants.

use crate::core::style::{LineStyle, Marker};

/// Number of entries in the fixed palette.
pub const PALETTE_LEN: usize = 10;

/// `set_style` uses every palette entry unless told otherwise.
pub const DEFAULT_CLASS_NUM: usize = 10;

/// Line styles paired with palette entries when line styles vary.
pub const LINE_PATTERN: [LineStyle; PALETTE_LEN] = [
    LineStyle::Solid,
    LineStyle::DashDot,
    LineStyle::Dashed,
    LineStyle::DashDot,
    LineStyle::Dotted,
    LineStyle::Dashed,
    LineStyle::DashDot,
    LineStyle::Solid,
    LineStyle::Dotted,
    LineStyle::Dashed,
];
/// Markers paired with palette entries.
pub const MARKER_PATTERN: [Marker; PALETTE_LEN] = [
    Marker::Point,
    Marker::Star,
    Marker::TriangleUp,
    Marker::Square,
    Marker::Point,
    Marker::Pentagon,
    Marker::Circle,
    Marker::Square,
    Marker::Point,
    Marker::ThinDiamond,
];

/// Upper bound on histogram edges, checked before any edge vector is allocated.
pub const MAX_EDGES: usize = 1 << 20;

pub const MARKER_SIZE: f64 = 3.0;
pub const LINE_WIDTH: f64 = 2.0;
pub const AXES_LABEL_SIZE: f64 = 20.0;
pub const AXES_TITLE_SIZE: f64 = 20.0;
pub const TICK_LABEL_SIZE: f64 = 20.0;
pub const LEGEND_FONT_SIZE: f64 = 12.0;
pub const GRID_ALPHA: f64 = 0.8;
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const AXES_LINE_WIDTH: f64 = 2.0;
pub const MAJOR_TICK_SIZE: f64 = 7.0;
pub const MAJOR_TICK_WIDTH: f64 = 3.0;
pub const MINOR_TICK_SIZE: f64 = 2.0;
pub const MINOR_TICK_WIDTH: f64 = 2.0;

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted bars
pub const LABEL_GUTTER: usize = 1;

/// Chart must be at least 7 characters tall
pub const MIN_CHART_HEIGHT: usize = 7;
/// Chart must be at least 14 characters wide
pub const MIN_CHART_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Edge labels are rounded to two decimal places.
///
/// 14.832 becomes 14.83
pub const DECIMAL_PRECISION: usize = 2;
