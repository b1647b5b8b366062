//! Process-global style parameter table.
//!
//! Keys use the dotted names plotting libraries understand (`lines.linewidth`,
//! `axes.prop_cycle`, ...) so a snapshot can be written out as a `.mplstyle` sheet
//! and handed to any backend.

use std::{collections::BTreeMap, fmt, fmt::Write as _};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::core::{
    error::StyleError,
    style::{PropCycle, StyleParams, TickStyle},
};

/// One value in the table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RcValue {
    Bool(bool),
    Float(f64),
    Text(String),
    Cycle(PropCycle),
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Cycle(c) => {
                let quoted = |items: Vec<String>| {
                    items
                        .iter()
                        .map(|s| format!("'{s}'"))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                let e = c.entries();
                write!(
                    f,
                    "(cycler('color', [{}]) + cycler('linestyle', [{}]) + cycler('marker', [{}]))",
                    quoted(e.iter().map(|x| x.colour.to_bare_hex()).collect()),
                    quoted(e.iter().map(|x| x.line_style.symbol().to_owned()).collect()),
                    quoted(e.iter().map(|x| x.marker.symbol().to_owned()).collect()),
                )
            }
        }
    }
}

impl From<bool> for RcValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
impl From<f64> for RcValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
impl From<&str> for RcValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}
impl From<PropCycle> for RcValue {
    fn from(v: PropCycle) -> Self {
        Self::Cycle(v)
    }
}

/// Ordered key/value table.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RcParams(BTreeMap<String, RcValue>);

impl RcParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RcValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RcValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` over this table.
    pub fn update(&mut self, other: &RcParams) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// `key: value` lines in key order, the `matplotlibrc` / `.mplstyle` format.
    #[must_use]
    pub fn to_mplstyle(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.0 {
            // writing into a String cannot fail
            let _ = writeln!(out, "{k}: {v}");
        }
        out
    }
}

fn insert_ticks(rc: &mut RcParams, axis: &str, t: &TickStyle) {
    rc.insert(format!("{axis}.direction"), t.direction.as_str());
    rc.insert(format!("{axis}.labelsize"), t.label_size);
    rc.insert(format!("{axis}.major.size"), t.major_size);
    rc.insert(format!("{axis}.major.width"), t.major_width);
    rc.insert(format!("{axis}.minor.size"), t.minor_size);
    rc.insert(format!("{axis}.minor.width"), t.minor_width);
}

impl From<&StyleParams> for RcParams {
    fn from(p: &StyleParams) -> Self {
        let mut rc = RcParams::new();
        rc.insert("axes.prop_cycle", p.prop_cycle.clone());

        rc.insert("lines.markersize", p.marker_size);
        rc.insert("lines.linewidth", p.line_width);

        rc.insert("axes.labelsize", p.axes_label_size);
        rc.insert("axes.titlesize", p.axes_title_size);

        insert_ticks(&mut rc, "xtick", &p.xtick);
        insert_ticks(&mut rc, "ytick", &p.ytick);

        rc.insert("legend.fontsize", p.legend_font_size);

        rc.insert("axes.grid", p.grid.enabled);
        rc.insert("grid.alpha", p.grid.alpha);
        rc.insert("grid.linestyle", p.grid.line_style.symbol());
        rc.insert("grid.linewidth", p.grid.line_width);

        rc.insert("axes.linewidth", p.axes_line_width);
        rc
    }
}

impl StyleParams {
    #[inline]
    #[must_use]
    pub fn to_rc(&self) -> RcParams {
        RcParams::from(self)
    }
}

// --- Global table ---

static GLOBAL: Lazy<RwLock<RcParams>> = Lazy::new(|| RwLock::new(RcParams::new()));

/// Write every setting of `params` into the global table, keeping unrelated keys.
pub fn apply(params: &StyleParams) {
    let rc = params.to_rc();
    debug!(
        classes = params.prop_cycle.len(),
        keys = rc.len(),
        "applying chart style"
    );
    GLOBAL.write().update(&rc);
}

/// Apply the house style for `class_num` series.
pub fn set_style(class_num: usize, vary_line_style: bool) -> Result<StyleParams, StyleError> {
    let params = StyleParams::builder()
        .class_num(class_num)
        .vary_line_style(vary_line_style)
        .build()?;
    apply(&params);
    Ok(params)
}

#[must_use]
pub fn get(key: &str) -> Option<RcValue> {
    GLOBAL.read().get(key).cloned()
}

#[must_use]
pub fn snapshot() -> RcParams {
    GLOBAL.read().clone()
}

/// Clear the global table.
pub fn reset() {
    GLOBAL.write().0.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::StyleParams;

    // the global table is shared between tests, so only the pure conversions are
    // checked here; tests/style.rs drives the global functions in its own process

    #[test]
    fn table_has_every_key() {
        let rc = StyleParams::builder().build().unwrap().to_rc();
        assert_eq!(rc.len(), 23);
        assert_eq!(rc.get("lines.markersize"), Some(&RcValue::Float(3.0)));
        assert_eq!(rc.get("axes.grid"), Some(&RcValue::Bool(true)));
        assert_eq!(rc.get("ytick.direction"), Some(&RcValue::Text("in".into())));
        assert_eq!(rc.get("grid.linestyle"), Some(&RcValue::Text("--".into())));
        assert_eq!(rc.get("xtick.minor.size"), Some(&RcValue::Float(2.0)));
    }

    #[test]
    fn mplstyle_text() {
        let rc = StyleParams::builder()
            .class_num(2)
            .build()
            .unwrap()
            .to_rc();
        let text = rc.to_mplstyle();
        assert!(text.contains(
            "axes.prop_cycle: (cycler('color', ['1E90FF', 'E6A817']) + \
             cycler('linestyle', ['-', '-.']) + cycler('marker', ['.', '*']))\n"
        ));
        assert!(text.contains("axes.grid: True\n"));
        assert!(text.contains("grid.alpha: 0.8\n"));
        assert!(text.contains("lines.linewidth: 2\n"));
        // BTreeMap keeps keys sorted
        assert!(text.starts_with("axes.grid: True\n"));
    }

    #[test]
    fn update_overwrites() {
        let mut a = RcParams::new();
        a.insert("figure.dpi", 100.0);
        a.insert("lines.linewidth", 9.0);
        let mut b = RcParams::new();
        b.insert("lines.linewidth", 2.0);
        a.update(&b);
        assert_eq!(a.get("figure.dpi"), Some(&RcValue::Float(100.0)));
        assert_eq!(a.get("lines.linewidth"), Some(&RcValue::Float(2.0)));
    }
}
