use std::{fs, io::Write};

use clap::Parser;
use plot_style::{
    BinSpec, HistogramError, HistogramOptions, PlotError,
    cli::{Cli, run_with},
    core::data::read_samples_from_path,
    histogram,
};

#[test]
fn hist_from_csv_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "id,size").unwrap();
    for (i, v) in [1.0, 2.0, 5.0, 8.0, 20.0, 32.0, 70.0, 128.0, 256.0].iter().enumerate() {
        writeln!(f, "{i},{v}").unwrap();
    }
    let path = f.path().to_str().unwrap().to_owned();

    let data = read_samples_from_path(&path, 1).unwrap();
    assert_eq!(data.len(), 9);

    let h = histogram(
        &data,
        &HistogramOptions::default().bins(BinSpec::Count(4)).log(true),
    )
    .unwrap();
    // edges 1, 4, 16, 64, 256
    assert_eq!(h.n_bins, 4);
    assert_eq!(h.total(), 9.0);
    assert_eq!(h.counts, vec![2.0, 2.0, 2.0, 3.0]);

    let cli = Cli::try_parse_from(["plot-style", "hist", path.as_str(), "-k", "1", "--log", "--json"])
        .unwrap();
    run_with(cli).unwrap();
}

#[test]
fn log_hist_rejects_non_positive_column() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "0\n1\n2").unwrap();
    let path = f.path().to_str().unwrap().to_owned();

    let cli = Cli::try_parse_from(["plot-style", "hist", path.as_str(), "--log"]).unwrap();
    assert!(matches!(
        run_with(cli),
        Err(PlotError::Histogram(HistogramError::NonPositive { .. }))
    ));
}

#[test]
fn style_sheet_written_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("style.toml");
    let out = dir.path().join("house.mplstyle");
    fs::write(&config, "[style]\nline_width = 1.5\ngrid = false\n").unwrap();

    let cli = Cli::try_parse_from([
        "plot-style",
        "style",
        "--classes",
        "2",
        "--config",
        config.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();
    run_with(cli).unwrap();

    let sheet = fs::read_to_string(&out).unwrap();
    assert!(sheet.contains("lines.linewidth: 1.5\n"));
    assert!(sheet.contains("axes.grid: False\n"));
    assert!(sheet.contains("cycler('color', ['1E90FF', 'E6A817'])"));
}

#[test]
fn bins_and_width_conflict() {
    assert!(Cli::try_parse_from(["plot-style", "hist", "--bins", "3", "--width", "1"]).is_err());
}
