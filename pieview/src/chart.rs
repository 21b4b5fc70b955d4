// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart state a host renders from.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;
use tracing::debug;

use crate::angles::{AngleEntry, calculate_angles};
use crate::animation::{AnimationClock, AnimationDriver, AnimationState, ChangeAnimation};
use crate::component::Component;
use crate::error::PieResult;
use crate::geometry::{ArcSweeps, PieGeometry, SliceArc, arc_sweeps};
use crate::pie_legend::PieLegend;
use crate::reconcile::reconcile;
use crate::style::PieStyle;

/// A pie chart: live components, their angles, an optional in-flight animation
/// and an optional attached legend.
///
/// Every write (new components, a new style, an animation frame) recomputes the
/// angles and refreshes the attached legend before returning, so readers always
/// see consistent derived state.
#[derive(Debug, Default)]
pub struct PieChart {
    components: Vec<Component>,
    angles: Vec<AngleEntry>,
    style: PieStyle,
    clock: AnimationClock,
    driver: Option<AnimationDriver>,
    legend: Option<PieLegend>,
}

impl PieChart {
    /// Creates an empty chart.
    pub fn new(style: PieStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Sets the initial components.
    #[must_use]
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.set_components(components);
        self
    }

    /// Sets the clock used by [`PieChart::tick_elapsed`].
    #[must_use]
    pub fn with_clock(mut self, clock: AnimationClock) -> Self {
        self.clock = clock;
        self
    }

    /// Live components, in drawing order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Angle entries aligned with [`PieChart::components`].
    pub fn angles(&self) -> &[AngleEntry] {
        &self.angles
    }

    /// Current style.
    pub fn style(&self) -> &PieStyle {
        &self.style
    }

    /// Animation clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Replaces the components without animating.
    ///
    /// An in-flight animation is cancelled.
    pub fn set_components(&mut self, components: Vec<Component>) {
        if self.driver.take().is_some() {
            debug!("in-flight animation cancelled by set_components");
        }
        self.components = components;
        self.recompute();
    }

    /// Replaces the style. Divider settings change the angles.
    pub fn set_style(&mut self, style: PieStyle) {
        self.style = style;
        self.recompute();
    }

    /// Slice and divider sweeps for the current frame.
    pub fn arc_sweeps(&self) -> ArcSweeps {
        arc_sweeps(
            &self.components,
            &self.angles,
            self.style.base_angle(),
            self.style.dividers,
        )
    }

    /// Ring geometry for `bounds`.
    pub fn geometry(&self, bounds: Rect) -> PieGeometry {
        PieGeometry::new(bounds, &self.style)
    }

    /// Slice arcs for the current frame inside `bounds`.
    pub fn slice_arcs(&self, bounds: Rect) -> Vec<SliceArc> {
        self.geometry(bounds)
            .slices(&self.components, &self.arc_sweeps())
    }

    /// Starts animating towards `new` over `duration_ms`.
    ///
    /// Any animation in flight is dropped; the transition starts from the
    /// current live values. Unsupported kinds fail before anything changes.
    pub fn animate_change(
        &mut self,
        new: Vec<Component>,
        kind: ChangeAnimation,
        duration_ms: u64,
    ) -> PieResult<()> {
        self.start_animation(new, kind, duration_ms, None)
    }

    /// Like [`PieChart::animate_change`], running `on_complete` once when the
    /// final frame is reached, right before zero-valued slices are pruned.
    ///
    /// The callback is dropped without running if the animation is cancelled.
    pub fn animate_change_with(
        &mut self,
        new: Vec<Component>,
        kind: ChangeAnimation,
        duration_ms: u64,
        on_complete: impl FnOnce() + 'static,
    ) -> PieResult<()> {
        self.start_animation(new, kind, duration_ms, Some(Box::new(on_complete)))
    }

    fn start_animation(
        &mut self,
        new: Vec<Component>,
        kind: ChangeAnimation,
        duration_ms: u64,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> PieResult<()> {
        let interpolation = kind.interpolation()?;
        self.driver = None;

        let pair = reconcile(&self.components, &new);
        let deltas = pair.deltas()?;
        let mut driver = AnimationDriver::new(&pair.start, deltas, interpolation)?;
        if let Some(on_complete) = on_complete {
            driver = driver.with_on_complete(on_complete);
        }

        self.components = pair.start;
        self.clock = AnimationClock::new(duration_ms).with_easing(self.clock.easing);
        self.driver = Some(driver);
        self.recompute();
        Ok(())
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Advances the animation to `fraction`.
    ///
    /// Returns `None` when nothing is animating. The driver is released once it
    /// reports [`AnimationState::Complete`].
    pub fn tick(&mut self, fraction: f64) -> PieResult<Option<AnimationState>> {
        let Some(driver) = self.driver.as_mut() else {
            return Ok(None);
        };
        let state = driver.tick(&mut self.components, fraction)?;
        self.recompute();
        if state == AnimationState::Complete {
            self.driver = None;
        }
        Ok(Some(state))
    }

    /// Advances the animation to `elapsed_ms` on the chart's clock.
    pub fn tick_elapsed(&mut self, elapsed_ms: u64) -> PieResult<Option<AnimationState>> {
        let fraction = self.clock.fraction_at(elapsed_ms);
        self.tick(fraction)
    }

    /// Attaches `legend`, binding it to this chart.
    ///
    /// Returns the previously attached legend, if any.
    pub fn attach_legend(&mut self, mut legend: PieLegend) -> Option<PieLegend> {
        legend.refresh(&self.components, &self.angles);
        self.legend.replace(legend)
    }

    /// The attached legend.
    pub fn legend(&self) -> Option<&PieLegend> {
        self.legend.as_ref()
    }

    /// The attached legend, for restyling.
    pub fn legend_mut(&mut self) -> Option<&mut PieLegend> {
        self.legend.as_mut()
    }

    /// Detaches the legend. It keeps its last state as a
    /// [`LegendBinding::Snapshot`](crate::LegendBinding::Snapshot).
    pub fn detach_legend(&mut self) -> Option<PieLegend> {
        let mut legend = self.legend.take()?;
        legend.detach();
        Some(legend)
    }

    fn recompute(&mut self) {
        self.angles = calculate_angles(&self.components, self.style.dividers);
        if let Some(legend) = self.legend.as_mut() {
            legend.refresh(&self.components, &self.angles);
        }
    }
}
