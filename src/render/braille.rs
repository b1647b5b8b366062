//! Histogram counts to UTF-8 braille bars.
//!
//! ### Workflow
//! 1. `preprocess_to_braille` groups bins so they fit the available half-columns,
//!    then maps each group to a pixel span (`BarSpan`) that always touches the
//!    bottom row.
//! 2. `encode_rows` turns the spans into one `String` per character row.
//!
//! A bar's intersection with a 4-pixel braille cell is a contiguous vertical range,
//! so it is always one of 11 canonical patterns (full, top/bottom triplets, the
//! three pairs, the four single dots, empty). The bit-mask for each pattern is
//! pre-computed for both the left and right half-columns.

use crate::core::constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION};

/// Pixel rows covered by one half-column, top-down (`top <= bottom`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarSpan {
    pub top: usize,
    pub bottom: usize,
}

#[derive(Debug)]
pub struct BraillePlot {
    /// One entry per half-column; `None` is an empty column.
    pub columns: Vec<Option<BarSpan>>,
    /// Bins folded into each bar.
    pub bins_per_bar: usize,
    /// Half-columns drawn per bar, gap included.
    pub cols_per_bar: usize,
}

// --- Pre-Computed Masks ---

/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three(⡆), 4 top-two (⠃), 5 middle-two (⠆), 6 bottom-two (⡄),
/// 7 dot-zero (⠁), 8 dot-one (⠂), 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⢸), 2 top-three (⠸), 3 bottom-three(⢰), 4 top-two (⠘), 5 middle-two (⠰), 6 bottom-two (⢠),
/// 7 dot-zero (⠈), 8 dot-one (⠐), 9 dot-two (⠠), 10 dot-three (⢀)
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

/// Map `(low, high)` pixel offsets inside a 4-row cell to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,  // full
        (0, 2) => 2,  // top-3
        (1, 3) => 3,  // bottom-3
        (0, 1) => 4,  // top-2
        (1, 2) => 5,  // middle-2
        (2, 3) => 6,  // bottom-2
        (0, 0) => 7,  // single-0
        (1, 1) => 8,  // single-1
        (2, 2) => 9,  // single-2
        (3, 3) => 10, // single-3
        _ => 0,       // empty / no overlap
    }
}

#[inline]
fn cell_pattern(span: Option<&BarSpan>, row_top: usize) -> usize {
    let row_bottom = row_top + BRAILLE_VERTICAL_RESOLUTION - 1;
    match span {
        Some(s) if s.bottom >= row_top && s.top <= row_bottom => pattern_id(
            s.top.max(row_top) - row_top,
            s.bottom.min(row_bottom) - row_top,
        ),
        _ => 0,
    }
}

/// Lay out `counts` as bars over `x_chars` × `y_chars` cells.
///
/// Adjacent bins are summed when there are more bins than half-columns. Bars wider
/// than one half-column leave their last half-column empty as a gap.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn preprocess_to_braille(counts: &[f64], x_chars: usize, y_chars: usize) -> BraillePlot {
    let half_cols = x_chars * HR;
    let bins_per_bar = counts.len().div_ceil(half_cols.max(1)).max(1);
    let bars: Vec<f64> = counts
        .chunks(bins_per_bar)
        .map(|c| c.iter().sum())
        .collect();
    let cols_per_bar = (half_cols / bars.len().max(1)).max(1);

    let vert_px = y_chars * BRAILLE_VERTICAL_RESOLUTION;
    let peak = bars.iter().copied().fold(0.0_f64, f64::max);

    let mut columns = Vec::with_capacity(bars.len() * cols_per_bar);
    for &v in &bars {
        let span = if peak > 0.0 && v > 0.0 {
            // any non-empty bin shows at least one pixel
            let h = ((v / peak) * vert_px as f64).round().max(1.0) as usize;
            Some(BarSpan {
                top: vert_px - h.min(vert_px),
                bottom: vert_px - 1,
            })
        } else {
            None
        };
        for c in 0..cols_per_bar {
            let gap = cols_per_bar > 1 && c == cols_per_bar - 1;
            columns.push(if gap { None } else { span });
        }
    }

    BraillePlot {
        columns,
        bins_per_bar,
        cols_per_bar,
    }
}

/// One `String` of exactly `x_chars` braille glyphs per character row.
#[must_use]
pub fn encode_rows(plot: &BraillePlot, x_chars: usize, y_chars: usize) -> Vec<String> {
    (0..y_chars)
        .map(|row| {
            let row_top = row * BRAILLE_VERTICAL_RESOLUTION;
            (0..x_chars)
                .map(|col| {
                    let left = cell_pattern(plot.columns.get(col * HR).and_then(Option::as_ref), row_top);
                    let right = cell_pattern(
                        plot.columns.get(col * HR + 1).and_then(Option::as_ref),
                        row_top,
                    );
                    // https://en.wikipedia.org/wiki/Braille_Patterns
                    let mask = LEFT_MASKS[left] | RIGHT_MASKS[right];
                    char::from_u32(0x2800 + u32::from(mask)).unwrap_or(' ')
                })
                .collect()
        })
        .collect()
}
