//! Chart configuration object + fluent builder for the terminal renderer.

use crate::core::{
    color::Rgb,
    constants::{MIN_CHART_HEIGHT, MIN_CHART_WIDTH},
    error::RenderError,
    palette,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub x_chars: usize,
    pub y_chars: usize,
    pub colour: Rgb,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder(x_chars: usize, y_chars: usize) -> ChartConfigBuilder {
        ChartConfigBuilder::new(x_chars, y_chars)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    colour: Option<Rgb>,
}

impl ChartConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            colour: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn colour(mut self, c: Rgb) -> Self {
        self.colour = Some(c);
        self
    }

    pub fn build(self) -> Result<ChartConfig, RenderError> {
        if self.x_chars < MIN_CHART_WIDTH || self.y_chars < MIN_CHART_HEIGHT {
            return Err(RenderError::TooSmall {
                want_w: MIN_CHART_WIDTH,
                want_h: MIN_CHART_HEIGHT,
                got_w: self.x_chars,
                got_h: self.y_chars,
            });
        }
        Ok(ChartConfig {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            colour: self.colour.unwrap_or_else(|| palette::colour_wrapping(0)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let cfg = ChartConfig::builder(14, 7).build().unwrap();
        assert!(cfg.title.is_empty());
        assert!(cfg.subtitle.is_none());
        assert_eq!(cfg.colour, palette::colour_wrapping(0));

        let cfg = ChartConfig::builder(20, 9)
            .title("t")
            .subtitle("s")
            .build()
            .unwrap();
        assert_eq!(cfg.subtitle.as_deref(), Some("s"));
        assert_eq!((cfg.x_chars, cfg.y_chars), (20, 9));
    }
}
