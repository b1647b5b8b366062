use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "plot-style",
    about = "Palette, chart style sheet and histogram binning helpers"
)]
pub struct Cli {
    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the palette as coloured swatches
    Palette,
    /// Apply the chart style and print it as a `.mplstyle` sheet
    Style(StyleArgs),
    /// Bin one numeric column and draw it
    Hist(HistArgs),
    /// Print example invocations
    Examples,
}

/// `plot-style style …`
#[derive(Parser, Debug)]
pub struct StyleArgs {
    /// Number of series classes (1-10)
    #[arg(short, long, default_value_t = 10)]
    pub classes: usize,

    /// Draw every series with a solid line
    #[arg(long)]
    pub no_vary_line_style: bool,

    /// TOML file with a `[style]` table of overrides
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the sheet here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// `plot-style hist …`
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("binning").args(["bins", "width"])))]
pub struct HistArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Zero-based column to bin
    #[arg(short = 'k', long, default_value_t = 0)]
    pub column: usize,

    /// Number of bins
    #[arg(short, long)]
    pub bins: Option<usize>,

    /// Bin width (log binning: growth factor minus one)
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Logarithmic bin edges
    #[arg(long)]
    pub log: bool,

    /// Normalise so the histogram integrates to one
    #[arg(long)]
    pub density: bool,

    /// Palette index used for the bars
    #[arg(long, default_value_t = 0)]
    pub colour: usize,

    /// Chart title
    #[arg(short, long, default_value = "Histogram")]
    pub title: String,

    /// Print the histogram as JSON instead of drawing it
    #[arg(long)]
    pub json: bool,
}
