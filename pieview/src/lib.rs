// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart presentation logic that does not depend on a UI toolkit.
//!
//! The host owns the canvas, the text engine and the animation clock. This crate
//! turns a list of labeled, weighted [`Component`]s into:
//! - **angle data**: per-component fractions and arc sweeps, with optional
//!   divider gaps between visible slices,
//! - **arc geometry**: `kurbo` arcs and strokes for slices, dividers and the
//!   background track,
//! - **transitions**: label-aligned start/end lists and a per-frame driver that
//!   interpolates values and prunes slices that shrank away, and
//! - **legend placements**: shape bounds, text and baseline origins for every
//!   component, measured through a host [`TextMeasurer`].
//!
//! [`PieChart`] ties these together and keeps derived state consistent after every
//! write; [`PieLegend`] follows the chart it is bound to.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod angles;
mod animation;
mod chart;
mod component;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod legend;
mod pie_legend;
mod reconcile;
mod shape;
mod style;

pub use angles::{AngleEntry, available_degrees, calculate_angles, total_value};
pub use animation::{
    AnimationClock, AnimationDriver, AnimationState, ChangeAnimation, Easing, Interpolation,
    ShiftInterpolation,
};
pub use chart::PieChart;
pub use component::{Component, label_map, label_set};
pub use error::{PieError, PieResult};
pub use geometry::{ArcSweep, ArcSweeps, PieGeometry, SliceArc, arc_sweeps};
pub use legend::{
    LegendEntry, LegendFormat, LegendLayout, LegendOrder, LegendOrientation, LegendStyle,
    legend_texts, measure_legend,
};
pub use pie_legend::{LegendBinding, PieLegend};
pub use pieview_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use reconcile::{ReconciledPair, reconcile};
pub use shape::{LegendShape, ShapeGeometry};
pub use style::{Dividers, PieStyle};
