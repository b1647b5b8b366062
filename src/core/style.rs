//! Chart style value types + fluent builder.
//!
//! `StyleParams` is the typed form of every setting `set_style` writes into the
//! global table. Build one with [`StyleParams::builder`], optionally layering a TOML
//! override file on top of the defaults.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::{
    color::Rgb,
    constants::{
        AXES_LABEL_SIZE, AXES_LINE_WIDTH, AXES_TITLE_SIZE, DEFAULT_CLASS_NUM, GRID_ALPHA,
        GRID_LINE_WIDTH, LEGEND_FONT_SIZE, LINE_PATTERN, LINE_WIDTH, MAJOR_TICK_SIZE,
        MAJOR_TICK_WIDTH, MARKER_PATTERN, MARKER_SIZE, MINOR_TICK_SIZE, MINOR_TICK_WIDTH,
        PALETTE_LEN, TICK_LABEL_SIZE,
    },
    error::StyleError,
    palette,
};

// --- Tokens ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[serde(rename = "-")]
    Solid,
    #[serde(rename = "-.")]
    DashDot,
    #[serde(rename = "--")]
    Dashed,
    #[serde(rename = ":")]
    Dotted,
}

impl LineStyle {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Solid => "-",
            Self::DashDot => "-.",
            Self::Dashed => "--",
            Self::Dotted => ":",
        }
    }

    pub fn from_symbol(s: &str) -> Result<Self, StyleError> {
        match s.trim() {
            "-" | "solid" => Ok(Self::Solid),
            "-." | "dashdot" => Ok(Self::DashDot),
            "--" | "dashed" => Ok(Self::Dashed),
            ":" | "dotted" => Ok(Self::Dotted),
            other => Err(StyleError::UnknownToken {
                kind: "line style",
                text: other.to_owned(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = ".")]
    Point,
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "^")]
    TriangleUp,
    #[serde(rename = "s")]
    Square,
    #[serde(rename = "p")]
    Pentagon,
    #[serde(rename = "o")]
    Circle,
    #[serde(rename = "d")]
    ThinDiamond,
}

impl Marker {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Point => ".",
            Self::Star => "*",
            Self::TriangleUp => "^",
            Self::Square => "s",
            Self::Pentagon => "p",
            Self::Circle => "o",
            Self::ThinDiamond => "d",
        }
    }

    pub fn from_symbol(s: &str) -> Result<Self, StyleError> {
        match s.trim() {
            "." => Ok(Self::Point),
            "*" => Ok(Self::Star),
            "^" => Ok(Self::TriangleUp),
            "s" => Ok(Self::Square),
            "p" => Ok(Self::Pentagon),
            "o" => Ok(Self::Circle),
            "d" => Ok(Self::ThinDiamond),
            other => Err(StyleError::UnknownToken {
                kind: "marker",
                text: other.to_owned(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl TickDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
impl fmt::Display for TickDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Property cycle ---

/// What series `i` of a plot is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CycleEntry {
    pub colour: Rgb,
    pub line_style: LineStyle,
    pub marker: Marker,
}

/// Zipped colour / line-style / marker cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropCycle(Vec<CycleEntry>);

impl PropCycle {
    /// First `class_num` palette colours and markers; line styles follow the fixed
    /// pattern, or are all solid when `vary_line_style` is off.
    pub fn new(class_num: usize, vary_line_style: bool) -> Result<Self, StyleError> {
        if !(1..=PALETTE_LEN).contains(&class_num) {
            return Err(StyleError::ClassCount {
                got: class_num,
                max: PALETTE_LEN,
            });
        }
        let entries = palette::first(class_num)
            .into_iter()
            .zip(LINE_PATTERN)
            .zip(MARKER_PATTERN)
            .map(|((colour, line_style), marker)| CycleEntry {
                colour,
                line_style: if vary_line_style {
                    line_style
                } else {
                    LineStyle::Solid
                },
                marker,
            })
            .collect();
        Ok(Self(entries))
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CycleEntry] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entry for series `i`, cycling.
    #[must_use]
    pub fn nth(&self, i: usize) -> Option<&CycleEntry> {
        if self.0.is_empty() {
            None
        } else {
            self.0.get(i % self.0.len())
        }
    }
}

// --- Params ---

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TickStyle {
    pub direction: TickDirection,
    pub label_size: f64,
    pub major_size: f64,
    pub major_width: f64,
    pub minor_size: f64,
    pub minor_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridStyle {
    pub enabled: bool,
    pub alpha: f64,
    pub line_style: LineStyle,
    pub line_width: f64,
}

/// Immutable set of style settings handed to [`crate::core::rc::apply`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleParams {
    pub prop_cycle: PropCycle,
    pub marker_size: f64,
    pub line_width: f64,
    pub axes_label_size: f64,
    pub axes_title_size: f64,
    pub axes_line_width: f64,
    pub legend_font_size: f64,
    pub xtick: TickStyle,
    pub ytick: TickStyle,
    pub grid: GridStyle,
}

impl StyleParams {
    #[inline]
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }
}

/// Every setting is optional; `None` keeps the default.
///
/// This is also the schema of the `[style]` table in a TOML style file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub class_num: Option<usize>,
    pub vary_line_style: Option<bool>,
    pub marker_size: Option<f64>,
    pub line_width: Option<f64>,
    pub axes_label_size: Option<f64>,
    pub axes_title_size: Option<f64>,
    pub axes_line_width: Option<f64>,
    pub legend_font_size: Option<f64>,
    pub tick_direction: Option<TickDirection>,
    pub tick_label_size: Option<f64>,
    pub major_tick_size: Option<f64>,
    pub major_tick_width: Option<f64>,
    pub minor_tick_size: Option<f64>,
    pub minor_tick_width: Option<f64>,
    pub grid: Option<bool>,
    pub grid_alpha: Option<f64>,
    pub grid_line_style: Option<LineStyle>,
    pub grid_line_width: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct StyleFile {
    #[serde(default)]
    style: StyleOverrides,
}

impl StyleOverrides {
    /// Parse TOML text with a `[style]` table.
    pub fn from_toml_str(text: &str) -> Result<Self, StyleError> {
        let file: StyleFile = toml::from_str(text)?;
        Ok(file.style)
    }

    pub fn from_path(path: &Path) -> Result<Self, StyleError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// `other` wins wherever it is set.
    fn merge(&mut self, other: Self) {
        macro_rules! take {
            ($($f:ident),*) => { $( if other.$f.is_some() { self.$f = other.$f; } )* };
        }
        take!(
            class_num,
            vary_line_style,
            marker_size,
            line_width,
            axes_label_size,
            axes_title_size,
            axes_line_width,
            legend_font_size,
            tick_direction,
            tick_label_size,
            major_tick_size,
            major_tick_width,
            minor_tick_size,
            minor_tick_width,
            grid,
            grid_alpha,
            grid_line_style,
            grid_line_width
        );
    }
}

/// Fluent builder, nothing validated until `build`.
#[derive(Debug, Default)]
pub struct StyleBuilder {
    o: StyleOverrides,
}

impl StyleBuilder {
    #[inline]
    #[must_use]
    pub fn class_num(mut self, n: usize) -> Self {
        self.o.class_num = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn vary_line_style(mut self, vary: bool) -> Self {
        self.o.vary_line_style = Some(vary);
        self
    }
    #[inline]
    #[must_use]
    pub fn marker_size(mut self, v: f64) -> Self {
        self.o.marker_size = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn line_width(mut self, v: f64) -> Self {
        self.o.line_width = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_direction(mut self, d: TickDirection) -> Self {
        self.o.tick_direction = Some(d);
        self
    }
    #[inline]
    #[must_use]
    pub fn grid(mut self, on: bool) -> Self {
        self.o.grid = Some(on);
        self
    }
    #[inline]
    #[must_use]
    pub fn grid_alpha(mut self, a: f64) -> Self {
        self.o.grid_alpha = Some(a);
        self
    }
    /// Layer a parsed override set on top of what is already set.
    #[inline]
    #[must_use]
    pub fn overrides(mut self, o: StyleOverrides) -> Self {
        self.o.merge(o);
        self
    }

    pub fn build(self) -> Result<StyleParams, StyleError> {
        let o = self.o;
        let size = |field: &'static str, v: Option<f64>, default: f64| {
            let value = v.unwrap_or(default);
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(StyleError::InvalidSize { field, value })
            }
        };

        let alpha = o.grid_alpha.unwrap_or(GRID_ALPHA);
        if !(0.0..=1.0).contains(&alpha) {
            return Err(StyleError::InvalidAlpha(alpha));
        }

        let tick = TickStyle {
            direction: o.tick_direction.unwrap_or_default(),
            label_size: size("tick_label_size", o.tick_label_size, TICK_LABEL_SIZE)?,
            major_size: size("major_tick_size", o.major_tick_size, MAJOR_TICK_SIZE)?,
            major_width: size("major_tick_width", o.major_tick_width, MAJOR_TICK_WIDTH)?,
            minor_size: size("minor_tick_size", o.minor_tick_size, MINOR_TICK_SIZE)?,
            minor_width: size("minor_tick_width", o.minor_tick_width, MINOR_TICK_WIDTH)?,
        };

        Ok(StyleParams {
            prop_cycle: PropCycle::new(
                o.class_num.unwrap_or(DEFAULT_CLASS_NUM),
                o.vary_line_style.unwrap_or(true),
            )?,
            marker_size: size("marker_size", o.marker_size, MARKER_SIZE)?,
            line_width: size("line_width", o.line_width, LINE_WIDTH)?,
            axes_label_size: size("axes_label_size", o.axes_label_size, AXES_LABEL_SIZE)?,
            axes_title_size: size("axes_title_size", o.axes_title_size, AXES_TITLE_SIZE)?,
            axes_line_width: size("axes_line_width", o.axes_line_width, AXES_LINE_WIDTH)?,
            legend_font_size: size("legend_font_size", o.legend_font_size, LEGEND_FONT_SIZE)?,
            xtick: tick,
            ytick: tick,
            grid: GridStyle {
                enabled: o.grid.unwrap_or(true),
                alpha,
                line_style: o.grid_line_style.unwrap_or(LineStyle::Dashed),
                line_width: size("grid_line_width", o.grid_line_width, GRID_LINE_WIDTH)?,
            },
        })
    }
}
