//! Geometry helpers: terminal size plumbing + label widths.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{BORDER_WIDTH, LABEL_GUTTER, MIN_CHART_HEIGHT, MIN_CHART_WIDTH};

/// Rows above and below the bars: two chrome rows each side plus the edge labels.
const CHROME_ROWS: usize = 5;
/// Histograms stop getting taller past this.
const MAX_CHART_HEIGHT: usize = 16;

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions to the chart char grid.
/// Leaves space for borders + labels.
#[inline]
#[must_use]
pub fn chart_dims((w, h): (Width, Height), label_width: usize) -> (usize, usize) {
    let x_chars = usize::from(w.0)
        .saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width + 1)
        .max(MIN_CHART_WIDTH);
    let y_chars = usize::from(h.0)
        .saturating_sub(CHROME_ROWS)
        .clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT);
    (x_chars, y_chars)
}

/// How wide will the y-axis labels be for the tallest bar?
#[inline]
#[must_use]
pub fn y_label_width(max_value: f64, decimals: usize) -> usize {
    format!("{max_value:.decimals$}").len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_leave_room_for_labels() {
        let (x, y) = chart_dims((Width(80), Height(30)), 4);
        assert_eq!(x, 80 - 2 - 1 - 4 - 1);
        assert_eq!(y, MAX_CHART_HEIGHT);
    }

    #[test]
    fn dims_never_below_minimum() {
        assert_eq!(
            chart_dims((Width(5), Height(3)), 4),
            (MIN_CHART_WIDTH, MIN_CHART_HEIGHT)
        );
    }

    #[test]
    fn label_width() {
        assert_eq!(y_label_width(12.0, 0), 2);
        assert_eq!(y_label_width(0.125, 2), 4);
    }
}
