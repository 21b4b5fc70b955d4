// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend text generation and layout.
//!
//! A legend is one swatch + text pair per component, laid out in a single row
//! (horizontal) or column (vertical). Layout works in two passes:
//! - **Measure**: every text goes through the host [`TextMeasurer`]; the result is
//!   the extent the host should reserve ([`measure_legend`]).
//! - **Arrange**: entries are placed from an origin the host picked
//!   ([`LegendLayout::compute`]).
//!
//! Both passes are recomputed from scratch on every call, so a change to the
//! text size, the components or the value format is picked up immediately.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::{Brush, Color};
use pieview_text::{TextMeasurer, TextMetrics, TextStyle};

use crate::angles::AngleEntry;
use crate::component::Component;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::shape::{LegendShape, ShapeGeometry};

/// Direction legend entries advance in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendOrientation {
    /// One entry per row, top to bottom.
    Vertical,
    /// One entry per column, left to right.
    #[default]
    Horizontal,
}

/// Which half of an entry comes first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendOrder {
    /// Swatch left of (vertical) or above (horizontal) the text.
    #[default]
    ShapeFirst,
    /// Text left of (vertical) or above (horizontal) the swatch.
    LabelFirst,
}

/// How the value part of a legend text is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendFormat {
    /// Share of the total as a whole percentage, e.g. ` 25%`.
    #[default]
    Percent,
    /// The raw value with two decimals, e.g. `0.50`.
    Value,
    /// Share of the total with two decimals, e.g. `25.00%`.
    DecimalPercent,
}

impl LegendFormat {
    /// Formats a component's value, given its share of the total.
    ///
    /// Every format rounds ties half away from zero.
    pub fn format(self, value: f64, fraction: f64) -> String {
        match self {
            Self::Value => format!("{:.2}", round_hundredths(value)),
            Self::Percent => {
                let percent = (fraction * 100.0).round();
                format!("{percent:3.0}%")
            }
            Self::DecimalPercent => format!("{:3.2}%", round_hundredths(fraction * 100.0)),
        }
    }
}

/// Rounds to two decimals, ties away from zero.
///
/// `{:.2}` alone rounds exact ties to even.
fn round_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Legend configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendStyle {
    /// Advance direction.
    pub orientation: LegendOrientation,
    /// Swatch/text order within an entry.
    pub order: LegendOrder,
    /// Swatch shape.
    pub shape: LegendShape,
    /// Swatch side length.
    pub shape_size: f64,
    /// Corner radius for [`LegendShape::Square`].
    pub corner_radius: f64,
    /// Text font size.
    pub text_size: f64,
    /// Text color.
    pub text_color: Color,
    /// Gap between rows, and between swatch and text in horizontal legends.
    pub vertical_spacing: f64,
    /// Gap between columns, and between swatch and text in vertical legends.
    pub horizontal_spacing: f64,
    /// Whether the label is part of the text.
    pub draw_label: bool,
    /// Whether the formatted value is part of the text.
    pub draw_value: bool,
    /// Value format.
    pub format: LegendFormat,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            orientation: LegendOrientation::Horizontal,
            order: LegendOrder::ShapeFirst,
            shape: LegendShape::Circle,
            shape_size: 100.0,
            corner_radius: 25.0,
            text_size: 60.0,
            text_color: Color::from_rgb8(0x44, 0x44, 0x44),
            vertical_spacing: 10.0,
            horizontal_spacing: 10.0,
            draw_label: true,
            draw_value: true,
            format: LegendFormat::Percent,
        }
    }
}

impl LegendStyle {
    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: LegendOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the entry order.
    #[must_use]
    pub fn with_order(mut self, order: LegendOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the swatch shape and size.
    #[must_use]
    pub fn with_shape(mut self, shape: LegendShape, shape_size: f64) -> Self {
        self.shape = shape;
        self.shape_size = shape_size.max(0.0);
        self
    }

    /// Sets the square swatch corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius.max(0.0);
        self
    }

    /// Sets the text size.
    #[must_use]
    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size.max(0.0);
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    /// Sets row and column spacing.
    #[must_use]
    pub fn with_spacing(mut self, vertical: f64, horizontal: f64) -> Self {
        self.vertical_spacing = vertical.max(0.0);
        self.horizontal_spacing = horizontal.max(0.0);
        self
    }

    /// Chooses which parts make up the text.
    #[must_use]
    pub fn with_text_parts(mut self, draw_label: bool, draw_value: bool) -> Self {
        self.draw_label = draw_label;
        self.draw_value = draw_value;
        self
    }

    /// Sets the value format.
    #[must_use]
    pub fn with_format(mut self, format: LegendFormat) -> Self {
        self.format = format;
        self
    }

    /// The text style passed to the measurer.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.text_size)
    }

    /// Builds the text for one component.
    pub fn text_for(&self, label: &str, value: f64, fraction: f64) -> String {
        let label = if self.draw_label { label } else { "" };
        if !self.draw_value {
            return label.into();
        }
        let value = self.format.format(value, fraction);
        if label.is_empty() {
            value
        } else {
            format!("{label} {value}")
        }
    }
}

/// Generates one legend text per component, in order.
///
/// Percentages use the fraction of the matching angle entry; components without
/// one count as `0`.
pub fn legend_texts(
    components: &[Component],
    angles: &[AngleEntry],
    style: &LegendStyle,
) -> Vec<String> {
    components
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let fraction = angles.get(i).map_or(0.0, |a| a.fraction);
            style.text_for(&c.label, c.value, fraction)
        })
        .collect()
}

/// Measures the extent of a legend for `components`.
pub fn measure_legend(
    components: &[Component],
    angles: &[AngleEntry],
    style: &LegendStyle,
    measurer: &dyn TextMeasurer,
) -> Size {
    let texts = legend_texts(components, angles, style);
    text_extent(&texts, style, measurer)
}

/// Measures the extent of a legend for pre-generated texts.
pub(crate) fn text_extent(
    texts: &[String],
    style: &LegendStyle,
    measurer: &dyn TextMeasurer,
) -> Size {
    let metrics = measure_texts(texts, style, measurer);
    extent(&metrics, style)
}

/// One placed legend entry.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// The `shape_size` box the swatch is drawn in.
    pub shape_bounds: Rect,
    /// Swatch geometry inside `shape_bounds`.
    pub shape: ShapeGeometry,
    /// Swatch fill.
    pub fill: Brush,
    /// Text to draw.
    pub text: String,
    /// Left end of the text's alphabetic baseline.
    pub text_origin: Point,
    /// Measured text box (baseline minus ascent to baseline plus descent).
    pub text_bounds: Rect,
}

/// A laid-out legend.
#[derive(Clone, Debug, Default)]
pub struct LegendLayout {
    /// Entries in component order.
    pub entries: Vec<LegendEntry>,
    /// Total extent, starting at the layout origin.
    pub size: Size,
}

impl LegendLayout {
    /// Generates texts for `components` and lays them out from `origin`.
    pub fn compute(
        components: &[Component],
        angles: &[AngleEntry],
        style: &LegendStyle,
        measurer: &dyn TextMeasurer,
        origin: Point,
    ) -> Self {
        let texts = legend_texts(components, angles, style);
        let fills: Vec<Color> = components.iter().map(|c| c.color).collect();
        Self::arrange(&texts, &fills, style, measurer, origin)
    }

    /// Lays out pre-generated texts with their swatch colors.
    ///
    /// `texts` and `fills` are paired by index; extra items on either side are
    /// ignored.
    pub fn arrange(
        texts: &[String],
        fills: &[Color],
        style: &LegendStyle,
        measurer: &dyn TextMeasurer,
        origin: Point,
    ) -> Self {
        let n = texts.len().min(fills.len());
        let texts = &texts[..n];
        let metrics = measure_texts(texts, style, measurer);
        let size = extent(&metrics, style);
        let s = style.shape_size;

        let mut entries = Vec::with_capacity(n);
        match style.orientation {
            LegendOrientation::Vertical => {
                let mut top = origin.y;
                for (i, (text, m)) in texts.iter().zip(&metrics).enumerate() {
                    let row_height = s.max(m.height());
                    let cy = top + 0.5 * row_height;
                    let baseline = cy + 0.5 * (m.ascent - m.descent);
                    let (shape_x, text_x) = match style.order {
                        LegendOrder::ShapeFirst => {
                            (origin.x, origin.x + s + style.horizontal_spacing)
                        }
                        LegendOrder::LabelFirst => {
                            (origin.x + m.width + style.horizontal_spacing, origin.x)
                        }
                    };
                    let shape_bounds = Rect::new(shape_x, cy - 0.5 * s, shape_x + s, cy + 0.5 * s);
                    entries.push(entry(
                        style,
                        shape_bounds,
                        fills[i],
                        text,
                        Point::new(text_x, baseline),
                        m,
                    ));
                    top += row_height;
                    if i + 1 < n {
                        top += style.vertical_spacing;
                    }
                }
            }
            LegendOrientation::Horizontal => {
                let text_height = max_height(&metrics);
                let mut left = origin.x;
                for (i, (text, m)) in texts.iter().zip(&metrics).enumerate() {
                    let column_width = s.max(m.width);
                    let cx = left + 0.5 * column_width;
                    let (shape_top, text_top) = match style.order {
                        LegendOrder::ShapeFirst => {
                            (origin.y, origin.y + s + style.vertical_spacing)
                        }
                        LegendOrder::LabelFirst => {
                            (origin.y + text_height + style.vertical_spacing, origin.y)
                        }
                    };
                    let shape_bounds = Rect::new(cx - 0.5 * s, shape_top, cx + 0.5 * s, shape_top + s);
                    entries.push(entry(
                        style,
                        shape_bounds,
                        fills[i],
                        text,
                        Point::new(cx - 0.5 * m.width, text_top + m.ascent),
                        m,
                    ));
                    left += column_width;
                    if i + 1 < n {
                        left += style.horizontal_spacing;
                    }
                }
            }
        }

        Self { entries, size }
    }

    /// Bounds of the whole legend at its origin.
    pub fn bounds(&self) -> Option<Rect> {
        self.entries
            .iter()
            .map(|e| e.shape_bounds.union(e.text_bounds))
            .reduce(|a, b| a.union(b))
    }
}

fn entry(
    style: &LegendStyle,
    shape_bounds: Rect,
    fill: Color,
    text: &str,
    text_origin: Point,
    metrics: &TextMetrics,
) -> LegendEntry {
    LegendEntry {
        shape_bounds,
        shape: style.shape.geometry(shape_bounds, style.corner_radius),
        fill: Brush::Solid(fill),
        text: text.into(),
        text_origin,
        text_bounds: Rect::new(
            text_origin.x,
            text_origin.y - metrics.ascent,
            text_origin.x + metrics.width,
            text_origin.y + metrics.descent,
        ),
    }
}

fn measure_texts(
    texts: &[String],
    style: &LegendStyle,
    measurer: &dyn TextMeasurer,
) -> Vec<TextMetrics> {
    let text_style = style.text_style();
    texts
        .iter()
        .map(|t| measurer.measure(t, &text_style))
        .collect()
}

fn max_height(metrics: &[TextMetrics]) -> f64 {
    metrics.iter().map(TextMetrics::height).fold(0.0, f64::max)
}

fn extent(metrics: &[TextMetrics], style: &LegendStyle) -> Size {
    if metrics.is_empty() {
        return Size::ZERO;
    }
    let gaps = (metrics.len() - 1) as f64;
    let s = style.shape_size;
    match style.orientation {
        LegendOrientation::Vertical => {
            let rows: f64 = metrics.iter().map(|m| s.max(m.height())).sum();
            let max_width = metrics.iter().map(|m| m.width).fold(0.0, f64::max);
            Size::new(
                s + style.horizontal_spacing + max_width,
                rows + style.vertical_spacing * gaps,
            )
        }
        LegendOrientation::Horizontal => {
            let columns: f64 = metrics.iter().map(|m| s.max(m.width)).sum();
            Size::new(
                columns + style.horizontal_spacing * gaps,
                style.vertical_spacing + s + max_height(metrics),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::angles::calculate_angles;
    use crate::style::Dividers;

    /// 10 units per char, 20 units tall (16 ascent, 4 descent).
    fn grid_measurer(text: &str, _: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: 10.0 * text.chars().count() as f64,
            ascent: 16.0,
            descent: 4.0,
        }
    }

    fn comps() -> Vec<Component> {
        alloc::vec![
            Component::new("A", 0.5, css::RED),
            Component::new("BB", 1.5, css::BLUE),
        ]
    }

    fn small_style() -> LegendStyle {
        LegendStyle::default()
            .with_shape(LegendShape::Square, 10.0)
            .with_spacing(5.0, 8.0)
            .with_text_parts(true, false)
    }

    #[test]
    fn percent_formats() {
        let comps = comps();
        let angles = calculate_angles(&comps, Dividers::HIDDEN);
        let style = LegendStyle::default();
        let texts = legend_texts(&comps, &angles, &style);
        assert_eq!(texts, ["A  25%", "BB  75%"]);

        let style = style.with_format(LegendFormat::DecimalPercent);
        let texts = legend_texts(&comps, &angles, &style);
        assert_eq!(texts, ["A 25.00%", "BB 75.00%"]);

        let style = style.with_format(LegendFormat::Value);
        let texts = legend_texts(&comps, &angles, &style);
        assert_eq!(texts, ["A 0.50", "BB 1.50"]);
    }

    #[test]
    fn text_parts_can_be_dropped() {
        let style = LegendStyle::default().with_text_parts(false, true);
        assert_eq!(style.text_for("A", 1.0, 1.0 / 3.0), " 33%");
        let style = style.with_text_parts(true, false);
        assert_eq!(style.text_for("A", 1.0, 0.5), "A");
        let style = style.with_text_parts(false, false);
        assert_eq!(style.text_for("A", 1.0, 0.5), "");
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(LegendFormat::Percent.format(0.0, 0.125), " 13%");
        assert_eq!(LegendFormat::Percent.format(0.0, 1.0), "100%");
        assert_eq!(LegendFormat::Percent.format(0.0, 0.0), "  0%");
    }

    #[test]
    fn two_decimal_formats_round_ties_like_percent() {
        assert_eq!(LegendFormat::Value.format(2.125, 0.0), "2.13");
        assert_eq!(LegendFormat::Value.format(0.125, 0.0), "0.13");
        assert_eq!(LegendFormat::Value.format(0.375, 0.0), "0.38");
        assert_eq!(LegendFormat::DecimalPercent.format(0.0, 0.00125), "0.13%");
        assert_eq!(LegendFormat::DecimalPercent.format(0.0, 0.25), "25.00%");
        assert_eq!(LegendFormat::Percent.format(0.0, 0.125), " 13%");
    }

    #[test]
    fn vertical_rows_stack_without_trailing_spacing() {
        let style = small_style().with_orientation(LegendOrientation::Vertical);
        let layout = LegendLayout::compute(
            &comps(),
            &[],
            &style,
            &grid_measurer,
            Point::new(100.0, 50.0),
        );
        // Rows are 20 tall (text beats the 10 swatch), 5 apart.
        assert_eq!(layout.size, Size::new(10.0 + 8.0 + 20.0, 20.0 + 5.0 + 20.0));

        let first = &layout.entries[0];
        assert_eq!(first.shape_bounds, Rect::new(100.0, 55.0, 110.0, 65.0));
        assert_eq!(first.text_origin, Point::new(118.0, 66.0));
        assert_eq!(first.text_bounds, Rect::new(118.0, 50.0, 128.0, 70.0));

        let second = &layout.entries[1];
        assert_eq!(second.shape_bounds.y0, 80.0);
        assert_eq!(second.text_bounds.y1, 95.0);
        assert_eq!(
            layout.bounds(),
            Some(Rect::new(100.0, 50.0, 138.0, 95.0))
        );
    }

    #[test]
    fn vertical_label_first_puts_the_swatch_after_the_text() {
        let style = small_style()
            .with_orientation(LegendOrientation::Vertical)
            .with_order(LegendOrder::LabelFirst);
        let layout = LegendLayout::compute(&comps(), &[], &style, &grid_measurer, Point::ZERO);
        let second = &layout.entries[1];
        assert_eq!(second.text_origin.x, 0.0);
        assert_eq!(second.shape_bounds.x0, 20.0 + 8.0);
    }

    #[test]
    fn horizontal_columns_center_shape_and_text() {
        let style = small_style().with_orientation(LegendOrientation::Horizontal);
        let layout = LegendLayout::compute(&comps(), &[], &style, &grid_measurer, Point::ZERO);
        // Columns are max(10, text width): 10 and 20, 8 apart.
        assert_eq!(layout.size, Size::new(10.0 + 8.0 + 20.0, 5.0 + 10.0 + 20.0));

        let first = &layout.entries[0];
        assert_eq!(first.shape_bounds, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(first.text_origin, Point::new(0.0, 15.0 + 16.0));

        let second = &layout.entries[1];
        assert_eq!(second.shape_bounds, Rect::new(23.0, 0.0, 33.0, 10.0));
        assert_eq!(second.text_origin.x, 18.0);
        assert!(second.text_bounds.x0 >= first.text_bounds.x1);
    }

    #[test]
    fn horizontal_label_first_puts_the_swatch_below() {
        let style = small_style().with_order(LegendOrder::LabelFirst);
        let layout = LegendLayout::compute(&comps(), &[], &style, &grid_measurer, Point::ZERO);
        let first = &layout.entries[0];
        assert_eq!(first.text_bounds.y0, 0.0);
        assert_eq!(first.shape_bounds.y0, 20.0 + 5.0);
    }

    #[test]
    fn circles_are_inscribed_in_the_swatch_box() {
        let style = small_style().with_shape(LegendShape::Circle, 12.0);
        let layout = LegendLayout::compute(&comps(), &[], &style, &grid_measurer, Point::ZERO);
        let ShapeGeometry::Circle(e) = layout.entries[0].shape else {
            panic!("expected an ellipse");
        };
        assert_eq!(e.center(), layout.entries[0].shape_bounds.center());
        assert_eq!(layout.entries[0].fill, Brush::Solid(css::RED));
    }

    #[test]
    fn empty_legend_has_no_extent() {
        for orientation in [LegendOrientation::Vertical, LegendOrientation::Horizontal] {
            let style = LegendStyle::default().with_orientation(orientation);
            let layout = LegendLayout::compute(&[], &[], &style, &grid_measurer, Point::ZERO);
            assert!(layout.entries.is_empty());
            assert_eq!(layout.size, Size::ZERO);
            assert_eq!(layout.bounds(), None);
            assert_eq!(measure_legend(&[], &[], &style, &grid_measurer), Size::ZERO);
        }
    }

    #[test]
    fn measure_tracks_text_size() {
        let comps = comps();
        let angles = calculate_angles(&comps, Dividers::HIDDEN);
        let measurer = crate::HeuristicTextMeasurer;
        let small = LegendStyle::default().with_text_size(10.0);
        let large = small.with_text_size(40.0);
        let a = measure_legend(&comps, &angles, &small, &measurer);
        let b = measure_legend(&comps, &angles, &large, &measurer);
        assert!(b.width > a.width);
        assert!(b.height > a.height);
    }
}
