// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A legend that follows a [`PieChart`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::Color;
use pieview_text::TextMeasurer;
use tracing::warn;

use crate::angles::{AngleEntry, calculate_angles};
use crate::chart::PieChart;
use crate::component::Component;
use crate::error::{PieError, PieResult};
use crate::legend::{LegendLayout, LegendStyle, legend_texts, text_extent};
use crate::style::Dividers;

/// What a [`PieLegend`] is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendBinding {
    /// Nothing yet; layout and measurement fail with [`PieError::Unbound`].
    #[default]
    Unbound,
    /// Attached to a chart, which refreshes the legend on every write.
    Bound,
    /// A one-shot copy of a chart's components and angles. It does not follow
    /// later changes to the chart; call [`PieLegend::update`] again or attach it.
    Snapshot,
    /// The built-in placeholder components.
    Preview,
}

/// Legend state for a chart.
///
/// The legend keeps its own copy of the chart's components and angles, and
/// the texts generated from them. Texts are regenerated whenever that copy or
/// the style changes, never lazily. Only [`PieChart::attach_legend`] keeps the
/// copy in sync with the chart.
#[derive(Clone, Debug, Default)]
pub struct PieLegend {
    style: LegendStyle,
    binding: LegendBinding,
    components: Vec<Component>,
    angles: Vec<AngleEntry>,
    texts: Vec<String>,
}

impl PieLegend {
    /// Creates an unbound legend.
    pub fn new(style: LegendStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Current binding.
    pub fn binding(&self) -> LegendBinding {
        self.binding
    }

    /// Current style.
    pub fn style(&self) -> &LegendStyle {
        &self.style
    }

    /// Replaces the style and regenerates the texts.
    pub fn set_style(&mut self, style: LegendStyle) {
        self.style = style;
        self.regenerate();
    }

    /// Copies the current state of `chart` once.
    ///
    /// The legend becomes a [`LegendBinding::Snapshot`]; it is not refreshed by
    /// later chart writes.
    pub fn update(&mut self, chart: &PieChart) {
        self.refresh(chart.components(), chart.angles());
        self.binding = LegendBinding::Snapshot;
    }

    /// Shows the placeholder components instead of a chart.
    pub fn preview(&mut self) {
        let components = Component::placeholders();
        self.angles = calculate_angles(&components, Dividers::HIDDEN);
        self.components = components;
        self.binding = LegendBinding::Preview;
        self.regenerate();
    }

    pub(crate) fn detach(&mut self) {
        if self.binding == LegendBinding::Bound {
            self.binding = LegendBinding::Snapshot;
        }
    }

    pub(crate) fn refresh(&mut self, components: &[Component], angles: &[AngleEntry]) {
        self.components.clear();
        self.components.extend_from_slice(components);
        self.angles.clear();
        self.angles.extend_from_slice(angles);
        self.binding = LegendBinding::Bound;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.texts = legend_texts(&self.components, &self.angles, &self.style);
    }

    /// Texts for the bound components, in order. Empty when unbound.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Components the legend currently shows.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Measures the legend extent.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> PieResult<Size> {
        self.check_bound()?;
        Ok(text_extent(&self.texts, &self.style, measurer))
    }

    /// Lays the legend out from `origin`.
    pub fn layout(&self, measurer: &dyn TextMeasurer, origin: Point) -> PieResult<LegendLayout> {
        self.check_bound()?;
        let fills: Vec<Color> = self.components.iter().map(|c| c.color).collect();
        Ok(LegendLayout::arrange(
            &self.texts,
            &fills,
            &self.style,
            measurer,
            origin,
        ))
    }

    fn check_bound(&self) -> PieResult<()> {
        if self.binding == LegendBinding::Unbound {
            warn!("legend accessed before it was bound to a chart");
            return Err(PieError::Unbound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::legend::LegendFormat;
    use crate::style::PieStyle;
    use crate::{HeuristicTextMeasurer, LegendOrientation};

    fn chart() -> PieChart {
        PieChart::new(PieStyle::default()).with_components(alloc::vec![
            Component::new("A", 1.0, css::RED),
            Component::new("B", 3.0, css::BLUE),
        ])
    }

    #[test]
    fn unbound_legend_refuses_layout() {
        let legend = PieLegend::new(LegendStyle::default());
        assert_eq!(legend.binding(), LegendBinding::Unbound);
        assert!(legend.texts().is_empty());
        assert_eq!(
            legend.measure(&HeuristicTextMeasurer),
            Err(PieError::Unbound)
        );
        assert!(matches!(
            legend.layout(&HeuristicTextMeasurer, Point::ZERO),
            Err(PieError::Unbound)
        ));
    }

    #[test]
    fn update_snapshots_the_chart() {
        let mut legend = PieLegend::new(LegendStyle::default());
        legend.update(&chart());
        assert_eq!(legend.binding(), LegendBinding::Snapshot);
        assert_eq!(legend.texts(), ["A  25%", "B  75%"]);

        let layout = legend
            .layout(&HeuristicTextMeasurer, Point::new(5.0, 5.0))
            .unwrap();
        assert_eq!(layout.entries.len(), 2);
        assert_eq!(layout.entries[1].text, "B  75%");
        assert_eq!(
            legend.measure(&HeuristicTextMeasurer).unwrap(),
            layout.size
        );
    }

    #[test]
    fn snapshots_do_not_follow_the_chart() {
        let mut chart = chart();
        let mut legend = PieLegend::new(LegendStyle::default());
        legend.update(&chart);
        chart.set_components(alloc::vec![Component::new("A", 1.0, css::RED)]);
        assert_eq!(legend.binding(), LegendBinding::Snapshot);
        assert_eq!(legend.texts(), ["A  25%", "B  75%"]);

        legend.update(&chart);
        assert_eq!(legend.texts(), ["A 100%"]);

        chart.attach_legend(legend);
        chart.set_components(alloc::vec![
            Component::new("A", 1.0, css::RED),
            Component::new("B", 1.0, css::BLUE),
        ]);
        let legend = chart.legend().unwrap();
        assert_eq!(legend.binding(), LegendBinding::Bound);
        assert_eq!(legend.texts(), ["A  50%", "B  50%"]);
    }

    #[test]
    fn style_changes_regenerate_texts() {
        let mut legend = PieLegend::new(LegendStyle::default());
        legend.update(&chart());
        legend.set_style(
            LegendStyle::default()
                .with_format(LegendFormat::Value)
                .with_orientation(LegendOrientation::Vertical),
        );
        assert_eq!(legend.texts(), ["A 1.00", "B 3.00"]);
    }

    #[test]
    fn preview_shows_placeholders() {
        let mut legend = PieLegend::new(LegendStyle::default().with_text_parts(true, false));
        legend.preview();
        assert_eq!(legend.binding(), LegendBinding::Preview);
        assert_eq!(legend.texts(), ["Test1", "Test2", "Test3", "Test4"]);
        assert!(legend.measure(&HeuristicTextMeasurer).is_ok());
    }
}
