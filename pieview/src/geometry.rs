// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice, divider and track arcs.
//!
//! A pie is drawn as a stroked ring: each slice is an arc of the same circle,
//! stroked with the slice color. Sweeps are accumulated in list order from a base
//! angle (12 o'clock plus the configured offset). Angles follow screen
//! conventions: degrees, `0` at 3 o'clock, positive sweeps run clockwise with
//! y pointing down.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Arc, BezPath, Point, Rect, Shape, Stroke, Vec2};
use peniko::Color;

use crate::angles::AngleEntry;
use crate::component::Component;
use crate::style::{Dividers, PieStyle};

/// An angular span in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcSweep {
    /// Start angle in degrees.
    pub start_degrees: f64,
    /// Sweep in degrees.
    pub sweep_degrees: f64,
}

impl ArcSweep {
    /// End angle in degrees.
    pub fn end_degrees(&self) -> f64 {
        self.start_degrees + self.sweep_degrees
    }
}

/// Accumulated slice and divider spans for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcSweeps {
    /// One span per component, in component order. Hidden components get a
    /// zero sweep.
    pub slices: Vec<ArcSweep>,
    /// Divider gaps, each placed right before a visible component.
    pub dividers: Vec<ArcSweep>,
}

/// Lays out slice sweeps starting at `base_degrees`.
///
/// With dividers shown, the first slice is offset by half a gap, and a full gap
/// is inserted after each slice whose successor is visible.
pub fn arc_sweeps(
    components: &[Component],
    angles: &[AngleEntry],
    base_degrees: f64,
    dividers: Dividers,
) -> ArcSweeps {
    let mut out = ArcSweeps::default();
    let mut cursor = base_degrees;
    if dividers.show {
        cursor += 0.5 * dividers.width_degrees;
    }
    for i in 0..components.len() {
        let sweep = angles.get(i).map_or(0.0, |a| a.degrees);
        out.slices.push(ArcSweep {
            start_degrees: cursor,
            sweep_degrees: sweep,
        });
        cursor += sweep;

        let next_visible = components.get(i + 1).is_some_and(Component::is_visible);
        if dividers.show && next_visible {
            out.dividers.push(ArcSweep {
                start_degrees: cursor,
                sweep_degrees: dividers.width_degrees,
            });
            cursor += dividers.width_degrees;
        }
    }
    out
}

/// A slice arc with its paint.
#[derive(Clone, Copy, Debug)]
pub struct SliceArc {
    /// Centerline of the stroked slice.
    pub arc: Arc,
    /// Slice color.
    pub color: Color,
}

/// Ring geometry for a pie inside host-provided bounds.
///
/// The ring is the largest circle centered in `bounds` that keeps the wider of
/// the slice and track strokes inside them.
#[derive(Clone, Debug)]
pub struct PieGeometry {
    /// Ring center.
    pub center: Point,
    /// Radius of the stroke centerline.
    pub radius: f64,
    /// Stroke for slices and dividers.
    pub stroke: Stroke,
    /// Stroke for the track, when drawn.
    pub track_stroke: Option<Stroke>,
    /// Track paint, with alpha applied.
    pub track_color: Color,
}

impl PieGeometry {
    /// Fits the ring into `bounds`.
    pub fn new(bounds: Rect, style: &PieStyle) -> Self {
        let max_stroke = style.stroke_width.max(style.track_width);
        let bounds = bounds.abs();
        let side = bounds.width().min(bounds.height());
        let radius = (0.5 * side - 0.5 * max_stroke).max(0.0);
        Self {
            center: bounds.center(),
            radius,
            stroke: Stroke::new(style.stroke_width).with_caps(style.stroke_cap),
            track_stroke: style
                .draw_track
                .then(|| Stroke::new(style.track_width)),
            track_color: style.track_paint(),
        }
    }

    /// The arc of the ring covering `sweep`.
    pub fn arc(&self, sweep: ArcSweep) -> Arc {
        Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: sweep.start_degrees.to_radians(),
            sweep_angle: sweep.sweep_degrees.to_radians(),
            x_rotation: 0.0,
        }
    }

    /// Slice arcs, one per component, in component order.
    pub fn slices(&self, components: &[Component], sweeps: &ArcSweeps) -> Vec<SliceArc> {
        components
            .iter()
            .zip(&sweeps.slices)
            .map(|(c, &sweep)| SliceArc {
                arc: self.arc(sweep),
                color: c.color,
            })
            .collect()
    }

    /// Divider gap arcs.
    pub fn dividers(&self, sweeps: &ArcSweeps) -> Vec<Arc> {
        sweeps.dividers.iter().map(|&s| self.arc(s)).collect()
    }

    /// The full-circle track, if drawn.
    pub fn track(&self) -> Option<Arc> {
        self.track_stroke.as_ref().map(|_| {
            self.arc(ArcSweep {
                start_degrees: 0.0,
                sweep_degrees: 360.0,
            })
        })
    }

    /// Flattens an arc of this ring into a path.
    pub fn path(arc: &Arc, tolerance: f64) -> BezPath {
        arc.path_elements(tolerance).collect()
    }
}
