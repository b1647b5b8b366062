//! Histogram binning with linear or logarithmic edges.
//!
//! * `BinSpec::Count`  - fixed number of bins
//! * `BinSpec::Width`  - fixed width (linear) or growth factor `1 + w` (log)
//! * `BinSpec::Auto`   - `floor(sqrt(n))` bins
//!
//! Linear edges snap outward to whole numbers (`floor(min)`, `ceil(max)`); log edges
//! span the exact data extrema. Every bin is half-open except the last, which is
//! closed, so the maximum sample is always counted.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{constants::MAX_EDGES, error::HistogramError};

/// How many bins, or how wide.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BinSpec {
    Count(usize),
    Width(f64),
    #[default]
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinScale {
    #[default]
    Linear,
    Log,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HistogramOptions {
    pub bins: BinSpec,
    pub density: bool,
    pub scale: BinScale,
}

impl HistogramOptions {
    #[inline]
    #[must_use]
    pub fn bins(mut self, b: BinSpec) -> Self {
        self.bins = b;
        self
    }
    #[inline]
    #[must_use]
    pub fn density(mut self, on: bool) -> Self {
        self.density = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn log(mut self, on: bool) -> Self {
        self.scale = if on { BinScale::Log } else { BinScale::Linear };
        self
    }
}

/// Linear bins share one width; log bins each have their own.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BinWidth {
    Uniform(f64),
    Varying(Vec<f64>),
}

impl BinWidth {
    /// Width of bin `i`.
    #[must_use]
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Self::Uniform(w) => *w,
            Self::Varying(ws) => ws.get(i).copied().unwrap_or(f64::NAN),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    pub n_bins: usize,
    pub bin_width: BinWidth,
    pub edges: Vec<f64>,
    /// Raw counts, or probability densities when `density` is set.
    pub counts: Vec<f64>,
    pub centers: Vec<f64>,
    /// Samples that landed in a bin (NaNs excluded).
    pub samples: usize,
    pub density: bool,
    pub scale: BinScale,
}

impl Histogram {
    /// Sum of `counts`. With `density` set this is not the sample count.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// `(left edge, right edge, count)` per bin.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(e, &c)| (e[0], e[1], c))
    }
}

// --- Edge generators ---

#[allow(clippy::cast_precision_loss)]
fn linspace(lo: f64, hi: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (num - 1) as f64;
            let mut v: Vec<f64> = (0..num).map(|i| lo + i as f64 * step).collect();
            // pin the end point against accumulated rounding
            v[num - 1] = hi;
            v
        }
    }
}

fn logspace(lo: f64, hi: f64, num: usize) -> Vec<f64> {
    let mut v: Vec<f64> = linspace(lo.log10(), hi.log10(), num)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect();
    if let Some(first) = v.first_mut() {
        *first = lo;
    }
    if let Some(last) = v.last_mut() {
        *last = hi;
    }
    v
}

/// Check a requested edge count against `MAX_EDGES` before anything is allocated.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn edge_count(requested: f64) -> Result<usize, HistogramError> {
    if requested.is_finite() && requested <= MAX_EDGES as f64 {
        Ok(requested.max(0.0) as usize)
    } else {
        Err(HistogramError::TooManyBins {
            requested: requested - 1.0,
        })
    }
}

/// `n` bins need `n + 1` edges.
#[allow(clippy::cast_precision_loss)]
fn edges_for_bins(n: usize) -> Result<usize, HistogramError> {
    n.checked_add(1)
        .filter(|&e| e <= MAX_EDGES)
        .ok_or(HistogramError::TooManyBins {
            requested: n as f64,
        })
}

/// Edges `lo, lo + w, ...` below `hi + w`; the last edge is the first one ≥ `hi`.
#[allow(clippy::cast_precision_loss)]
fn arange(lo: f64, hi: f64, w: f64) -> Result<Vec<f64>, HistogramError> {
    let num = edge_count(((hi + w - lo) / w).ceil())?;
    Ok((0..num).map(|k| lo + k as f64 * w).collect())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn sqrt_rule(n: usize) -> usize {
    ((n as f64).sqrt() as usize).max(1)
}

// --- Counting ---

/// Index of the bin holding `x`, or `None` when it lies outside the edges.
fn bin_index(edges: &[f64], x: f64) -> Option<usize> {
    let (&first, &last) = (edges.first()?, edges.last()?);
    if x < first || x > last || edges.len() < 2 {
        return None;
    }
    if x == last {
        return Some(edges.len() - 2);
    }
    // first edge strictly greater than x, minus one
    let upper = edges.partition_point(|&e| e <= x);
    Some(upper.saturating_sub(1).min(edges.len() - 2))
}

fn count(data: &[f64], edges: &[f64]) -> (Vec<f64>, usize) {
    let mut counts = vec![0.0; edges.len().saturating_sub(1)];
    let mut inside = 0usize;
    for &x in data {
        if let Some(i) = bin_index(edges, x) {
            counts[i] += 1.0;
            inside += 1;
        }
    }
    (counts, inside)
}

// --- API ---

/// Bin `data` according to `opts`.
///
/// NaN samples are dropped. Infinite samples, empty input and non-positive data
/// under log binning are errors.
#[allow(clippy::cast_precision_loss)]
pub fn histogram(data: &[f64], opts: &HistogramOptions) -> Result<Histogram, HistogramError> {
    if let Some(index) = data.iter().position(|x| x.is_infinite()) {
        return Err(HistogramError::NonFinite { index });
    }
    let clean: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    let dropped = data.len() - clean.len();
    if dropped > 0 {
        warn!(dropped, "ignoring NaN samples");
    }
    if clean.is_empty() {
        return Err(HistogramError::Empty);
    }

    match opts.bins {
        BinSpec::Count(0) => return Err(HistogramError::BinCount),
        BinSpec::Width(w) if !(w.is_finite() && w > 0.0) => {
            return Err(HistogramError::BinWidth(w));
        }
        _ => {}
    }

    let (lo, hi) = clean
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });

    let (edges, bin_width) = match opts.scale {
        BinScale::Log => {
            if lo <= 0.0 {
                return Err(HistogramError::NonPositive { min: lo });
            }
            if lo == hi {
                return Err(HistogramError::DegenerateRange(lo));
            }
            let edges = match opts.bins {
                BinSpec::Count(n) => logspace(lo, hi, edges_for_bins(n)?),
                BinSpec::Width(w) => {
                    let num = edge_count(((hi.ln() - lo.ln()) / w.ln_1p()).floor() + 1.0)?;
                    // geometric spacing is linear spacing in log space
                    logspace(lo, hi, num.max(2))
                }
                BinSpec::Auto => logspace(lo, hi, edges_for_bins(sqrt_rule(clean.len()))?),
            };
            let widths = edges.windows(2).map(|e| e[1] - e[0]).collect();
            (edges, BinWidth::Varying(widths))
        }
        BinScale::Linear => {
            let a = lo.floor();
            let mut b = hi.ceil();
            if a == b {
                b = a + 1.0;
            }
            match opts.bins {
                BinSpec::Count(n) => (
                    linspace(a, b, edges_for_bins(n)?),
                    BinWidth::Uniform((b - a) / n as f64),
                ),
                BinSpec::Width(w) => (arange(a, b, w)?, BinWidth::Uniform(w)),
                BinSpec::Auto => {
                    let n = sqrt_rule(clean.len());
                    (
                        linspace(a, b, edges_for_bins(n)?),
                        BinWidth::Uniform((b - a) / n as f64),
                    )
                }
            }
        }
    };

    let n_bins = edges.len().saturating_sub(1);
    let (mut counts, inside) = count(&clean, &edges);
    debug!(n_bins, inside, scale = ?opts.scale, "binned samples");

    if opts.density && inside > 0 {
        let total = inside as f64;
        for (i, c) in counts.iter_mut().enumerate() {
            *c /= total * bin_width.at(i);
        }
    }

    let centers = edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect();

    Ok(Histogram {
        n_bins,
        bin_width,
        edges,
        counts,
        centers,
        samples: inside,
        density: opts.density,
        scale: opts.scale,
    })
}
