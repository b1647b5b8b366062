use std::fs;

use tracing::{debug, info};

use crate::{
    core::{
        bounds::{chart_dims, terminal_geometry},
        color::colorize,
        config::ChartConfig,
        constants::DECIMAL_PRECISION,
        data::read_samples_from_path,
        error::PlotError,
        histogram::{BinScale, BinSpec, Histogram, HistogramOptions, histogram},
        palette::{self, PALETTE},
        rc,
        style::{StyleOverrides, StyleParams},
    },
    render::{label_width, render_histogram},
};

use super::parse::{HistArgs, StyleArgs};

/// Pretty-print every palette entry.
pub fn palette() {
    println!("\nPalette:");
    for (i, p) in PALETTE.iter().enumerate() {
        let swatch = colorize(&p.colour.ansi_fg(), "████");
        println!("{i:>2}  {swatch}  {}  {}", p.colour, p.name);
    }
    println!();
}

/// Build the style, apply it globally and emit the resulting sheet.
pub fn style(a: &StyleArgs) -> Result<(), PlotError> {
    let mut b = StyleParams::builder()
        .class_num(a.classes)
        .vary_line_style(!a.no_vary_line_style);
    if let Some(path) = &a.config {
        debug!(path = %path.display(), "loading style overrides");
        b = b.overrides(StyleOverrides::from_path(path)?);
    }
    let params = b.build()?;
    rc::apply(&params);

    let sheet = rc::snapshot().to_mplstyle();
    match &a.out {
        Some(path) => {
            fs::write(path, sheet)?;
            info!(path = %path.display(), "wrote style sheet");
        }
        None => print!("{sheet}"),
    }
    Ok(())
}

pub(crate) fn hist_options(a: &HistArgs) -> HistogramOptions {
    let bins = match (a.bins, a.width) {
        (Some(n), _) => BinSpec::Count(n),
        (None, Some(w)) => BinSpec::Width(w),
        (None, None) => BinSpec::Auto,
    };
    HistogramOptions::default()
        .bins(bins)
        .density(a.density)
        .log(a.log)
}

fn bin_table(h: &Histogram) -> String {
    let mut out = String::from("  left        right       count\n");
    for (l, r, c) in h.iter() {
        let p = DECIMAL_PRECISION;
        let cp = if h.density { 4 } else { 0 };
        out.push_str(&format!("  {l:<10.p$}  {r:<10.p$}  {c:.cp$}\n"));
    }
    out
}

/// Chart footer: counted samples, bin count and scale.
fn subtitle(h: &Histogram) -> String {
    let scale = match h.scale {
        BinScale::Linear => "linear",
        BinScale::Log => "log",
    };
    format!("{} samples, {} {scale} bins", h.samples, h.n_bins)
}

pub fn hist(a: &HistArgs) -> Result<(), PlotError> {
    let data = read_samples_from_path(&a.file, a.column)?;
    let hist = histogram(&data, &hist_options(a))?;

    if a.json {
        println!("{}", serde_json::to_string_pretty(&hist)?);
        return Ok(());
    }

    let (x_chars, y_chars) = chart_dims(terminal_geometry(), label_width(&hist));

    let cfg = ChartConfig::builder(x_chars, y_chars)
        .title(&a.title)
        .subtitle(subtitle(&hist))
        .colour(palette::colour(a.colour)?)
        .build()?;

    print!("{}", render_histogram(&hist, &cfg)?);
    print!("{}", bin_table(&hist));
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "plot-style";
    println!(
        "
Example invocations
-------------------
• Palette swatches   : {bin} palette
• Style sheet        : {bin} style --classes 4 --out house.mplstyle
• Solid lines only   : {bin} style --no-vary-line-style
• Style overrides    : {bin} style --config style.toml
• Auto histogram     : {bin} hist samples.csv
• Fixed bin count    : {bin} hist samples.csv --bins 20 --colour 2
• Log bins, density  : {bin} hist sizes.csv --column 1 --log --density
• JSON output        : {bin} hist samples.csv --width 0.5 --json
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(bins: Option<usize>, width: Option<f64>) -> HistArgs {
        HistArgs {
            file: "-".into(),
            column: 0,
            bins,
            width,
            log: true,
            density: false,
            colour: 0,
            title: String::new(),
            json: false,
        }
    }

    #[test]
    fn option_mapping() {
        assert_eq!(hist_options(&args(Some(5), None)).bins, BinSpec::Count(5));
        assert_eq!(hist_options(&args(None, Some(0.5))).bins, BinSpec::Width(0.5));
        let o = hist_options(&args(None, None));
        assert_eq!(o.bins, BinSpec::Auto);
        assert_eq!(o.scale, BinScale::Log);
    }

    #[test]
    fn table_rows() {
        let h = histogram(&[0.5, 1.5, 1.7], &HistogramOptions::default().bins(BinSpec::Count(2)))
            .unwrap();
        let t = bin_table(&h);
        assert_eq!(t.lines().count(), 3);
        assert!(t.lines().nth(2).unwrap().trim_end().ends_with('2'));
    }

    #[test]
    fn subtitle_counts_only_binned_samples() {
        let h = histogram(
            &[1.0, f64::NAN, 2.0, f64::NAN, 3.0],
            &HistogramOptions::default().bins(BinSpec::Count(2)),
        )
        .unwrap();
        assert_eq!(subtitle(&h), "3 samples, 2 linear bins");

        let h = histogram(&[1.0, 10.0, f64::NAN], &HistogramOptions::default().log(true))
            .unwrap();
        assert!(subtitle(&h).starts_with("2 samples, "));
        assert!(subtitle(&h).ends_with(" log bins"));
    }
}
