//! Framed text chart for a histogram: title bar, y labels, bars, edge labels.

use crate::{
    core::{
        bounds::y_label_width,
        color::{AnsiCode, colorize},
        config::ChartConfig,
        constants::{BORDER_WIDTH, DECIMAL_PRECISION, LABEL_GUTTER},
        error::RenderError,
        histogram::Histogram,
    },
    render::braille::{encode_rows, preprocess_to_braille},
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

// --- Helpers ---

/// Write centred colored text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Counts print as integers, densities with fixed decimals.
fn value_decimals(h: &Histogram) -> usize {
    if h.density { DECIMAL_PRECISION } else { 0 }
}

// --- API ---

/// Width of the y label column `render_histogram` draws for `hist`.
///
/// Sized from the total count, which bounds every folded bar, so it is known before
/// the chart width is chosen.
#[must_use]
pub fn label_width(hist: &Histogram) -> usize {
    let decimals = value_decimals(hist);
    y_label_width(hist.total(), decimals).max(format!("{:.decimals$}", 0.0).len())
}

/// Render `hist` as a boxed braille bar chart.
///
/// The top row carries the tallest bar's value, the bottom row `0`; the first and
/// last bin edges sit under the plot's left and right ends.
pub fn render_histogram(hist: &Histogram, cfg: &ChartConfig) -> Result<String, RenderError> {
    if hist.counts.is_empty() {
        return Err(RenderError::NoBins);
    }
    let colour = cfg.colour.ansi_fg();
    let decimals = value_decimals(hist);

    let plot = preprocess_to_braille(&hist.counts, cfg.x_chars, cfg.y_chars);
    let rows = encode_rows(&plot, cfg.x_chars, cfg.y_chars);

    // labels follow the folded bars, not the raw bins
    let peak = hist
        .counts
        .chunks(plot.bins_per_bar)
        .map(|c| c.iter().sum::<f64>())
        .fold(0.0_f64, f64::max);
    let high_label = format!("{peak:.decimals$}");
    let low_label = format!("{:.decimals$}", 0.0);
    let label_width = label_width(hist);

    let line_len = cfg.x_chars + label_width + LABEL_GUTTER + BORDER_WIDTH;
    let inner = line_len - BORDER_WIDTH;
    let mut out = String::with_capacity(line_len * (cfg.y_chars + 6) * 3);

    // --- top ---
    out.push_str(TL);
    push_centered(&mut out, &cfg.title, inner, &colour);
    out.push_str(TR);
    out.push('\n');

    // --- rows ---
    for (r, row) in rows.iter().enumerate() {
        let label = if r == 0 {
            high_label.as_str()
        } else if r + 1 == rows.len() {
            low_label.as_str()
        } else {
            ""
        };
        out.push_str(V);
        out.push_str(&format!("{label:>label_width$}"));
        out.push_str(&" ".repeat(LABEL_GUTTER));
        out.push_str(&colorize(&colour, row));
        out.push_str(V);
        out.push('\n');
    }

    // --- bottom ---
    out.push_str(BL);
    if let Some(sub) = &cfg.subtitle {
        push_centered(&mut out, sub, inner, &colour);
    } else {
        out.push_str(&H.repeat(inner));
    }
    out.push_str(BR);
    out.push('\n');

    // --- edge labels ---
    let first = hist.edges.first().copied().unwrap_or_default();
    let last = hist.edges.last().copied().unwrap_or_default();
    let left = format!("{:.*}", DECIMAL_PRECISION, first);
    let right = format!("{:.*}", DECIMAL_PRECISION, last);
    let indent = V.chars().count() + label_width + LABEL_GUTTER;
    let room = cfg.x_chars.saturating_sub(left.len());
    out.push_str(&" ".repeat(indent));
    out.push_str(&left);
    out.push_str(&format!("{right:>room$}"));
    out.push('\n');

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use terminal_size::{Height, Width};

    use crate::core::{
        bounds::chart_dims,
        color::Rgb,
        histogram::{BinSpec, HistogramOptions, histogram},
    };

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_esc = false;
        for c in s.chars() {
            match (in_esc, c) {
                (false, '\x1b') => in_esc = true,
                (true, 'm') => in_esc = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    fn sample() -> Histogram {
        histogram(
            &[0.5, 1.5, 1.6, 2.5, 2.6, 2.7, 3.5],
            &HistogramOptions::default().bins(BinSpec::Count(4)),
        )
        .unwrap()
    }

    #[test]
    fn frame_layout() {
        let cfg = ChartConfig::builder(16, 7)
            .title("Sizes")
            .colour(Rgb::new(255, 0, 0))
            .build()
            .unwrap();
        let text = strip_ansi(&render_histogram(&sample(), &cfg).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        // title + 7 rows + bottom + edge labels
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with('┌') && lines[0].contains("Sizes"));
        assert!(lines[1].starts_with("│3 "));
        assert!(lines[7].starts_with("│0 "));
        assert!(lines[8].starts_with('└') && lines[8].ends_with('┘'));
        assert!(lines[9].trim_start().starts_with("0.00"));
        assert!(lines[9].ends_with("4.00"));

        // every framed line has the same width
        let width = lines[0].chars().count();
        assert!(lines[..9].iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn colour_escape_wraps_rows() {
        let cfg = ChartConfig::builder(14, 7)
            .colour(Rgb::new(1, 2, 3))
            .build()
            .unwrap();
        let text = render_histogram(&sample(), &cfg).unwrap();
        assert!(text.contains("\x1b[38;2;1;2;3m"));
    }

    #[test]
    fn folded_labels_fit_the_sized_chart() {
        // 400 unit bins squeezed into a narrow chart fold into bars far taller than
        // any single bin.
        let data: Vec<f64> = (0..4000_u32).map(|i| f64::from(i % 400) + 0.5).collect();
        let hist = histogram(&data, &HistogramOptions::default().bins(BinSpec::Count(400)))
            .unwrap();
        let term_w = 40;
        let (x_chars, y_chars) =
            chart_dims((Width(term_w), Height(20)), label_width(&hist));
        let cfg = ChartConfig::builder(x_chars, y_chars).build().unwrap();
        let text = strip_ansi(&render_histogram(&hist, &cfg).unwrap());

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.iter().all(|l| l.chars().count() <= usize::from(term_w)));
        let width = lines[0].chars().count();
        assert!(lines[..lines.len() - 1].iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn too_small_is_rejected() {
        assert!(matches!(
            ChartConfig::builder(5, 7).build(),
            Err(RenderError::TooSmall { got_w: 5, .. })
        ));
    }
}
