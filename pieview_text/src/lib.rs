// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for pie chart legends.
//!
//! Legend layout needs the width and height of every label before it can place
//! swatches next to them. Shaping and glyph rasterization belong to the host, so
//! the legend only depends on the tiny [`TextMeasurer`] interface defined here.
//!
//! Anything that can answer "how big is this string at this size" can act as a
//! measurer: a shaping engine, a platform canvas, or a plain closure.

#![no_std]

/// Measures single-line text for legend layout.
///
/// `text` is always a single line; legends never wrap.
pub trait TextMeasurer {
    /// Returns the metrics of `text` rendered with `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Lets a host pass a measuring callback directly.
impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> TextMetrics,
{
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the host's coordinate system (typically pixels).
    pub font_size: f64,
    /// Generic font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Generic font family selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
}

impl FontFamily {
    /// Returns the CSS generic family name.
    #[must_use]
    pub fn as_css_family(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the whole line.
    pub width: f64,
    /// Distance from the baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Creates metrics from a width and a total height, splitting the height
    /// 80/20 between ascent and descent.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            width,
            ascent: 0.8 * height,
            descent: 0.2 * height,
        }
    }

    /// Returns `ascent + descent`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A heuristic measurer for demos, previews and tests.
///
/// It assumes an average glyph width of 0.55em (0.6em for monospace), 10%
/// wider from [`FontWeight::BOLD`] up, and a line height of exactly 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let mut glyph = match style.font_family {
            FontFamily::Monospace => 0.6,
            FontFamily::Serif | FontFamily::SansSerif => 0.55,
        };
        if style.font_weight >= FontWeight::BOLD {
            glyph *= 1.1;
        }
        let width = glyph * style.font_size * text.chars().count() as f64;
        TextMetrics::from_size(width, style.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_chars_and_size() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0).with_family(FontFamily::Monospace);
        let a = m.measure("ab", &style);
        let b = m.measure("abcd", &style);
        assert!((a.width - 12.0).abs() < 1e-9, "{a:?}");
        assert!((b.width - 2.0 * a.width).abs() < 1e-9, "{b:?}");
        assert!((a.height() - 10.0).abs() < 1e-9, "{a:?}");
    }

    #[test]
    fn bold_text_measures_wider() {
        let m = HeuristicTextMeasurer;
        let normal = TextStyle::new(10.0);
        let bold = normal.with_weight(FontWeight::BOLD);
        assert_eq!(normal.font_weight, FontWeight::NORMAL);
        let a = m.measure("abc", &normal);
        let b = m.measure("abc", &bold);
        assert!((b.width - 1.1 * a.width).abs() < 1e-9, "{a:?} {b:?}");
        assert_eq!(a.height(), b.height());
        assert_eq!(m.measure("abc", &bold.with_weight(FontWeight(900))), b);
    }

    #[test]
    fn css_family_names() {
        assert_eq!(FontFamily::Serif.as_css_family(), "serif");
        assert_eq!(TextStyle::default().font_family.as_css_family(), "sans-serif");
        assert_eq!(FontFamily::Monospace.as_css_family(), "monospace");
    }

    #[test]
    fn closures_act_as_measurers() {
        let fixed = |text: &str, style: &TextStyle| {
            TextMetrics::from_size(text.len() as f64, style.font_size)
        };
        let m = fixed.measure("hello", &TextStyle::new(20.0));
        assert_eq!(m.width, 5.0);
        assert!((m.height() - 20.0).abs() < 1e-9, "{m:?}");
    }
}
