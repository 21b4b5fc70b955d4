// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! Every default lives here, as a value the host passes in at construction
//! time. Changing a style goes through [`crate::PieChart::set_style`], which
//! recomputes derived angle data in the same call.

use kurbo::Cap;
use peniko::Color;
use peniko::color::palette::css;

/// Divider gaps between visible slices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dividers {
    /// Whether gaps are reserved and drawn.
    pub show: bool,
    /// Gap size in degrees, reserved once per visible slice.
    pub width_degrees: f64,
}

impl Dividers {
    /// No gaps.
    pub const HIDDEN: Self = Self {
        show: false,
        width_degrees: 2.0,
    };

    /// Gaps of `width_degrees` between visible slices.
    pub fn shown(width_degrees: f64) -> Self {
        Self {
            show: true,
            width_degrees,
        }
    }

    /// Degrees reserved for `visible` slices.
    pub fn reserved_degrees(&self, visible: usize) -> f64 {
        if self.show {
            self.width_degrees * visible as f64
        } else {
            0.0
        }
    }
}

impl Default for Dividers {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Ring styling for the pie itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieStyle {
    /// Offset in degrees added to the 12 o'clock start position.
    pub start_angle: f64,
    /// Stroke width of the slice ring.
    pub stroke_width: f64,
    /// Line cap for slice arcs.
    pub stroke_cap: Cap,
    /// Whether a full-circle track is drawn under the slices.
    pub draw_track: bool,
    /// Stroke width of the track.
    pub track_width: f64,
    /// Track color, before `track_alpha` is applied.
    pub track_color: Color,
    /// Track opacity in `[0, 1]`.
    pub track_alpha: f32,
    /// Divider gaps.
    pub dividers: Dividers,
}

impl PieStyle {
    /// Sets the start angle offset in degrees.
    #[must_use]
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Sets the slice stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Sets the slice line cap.
    #[must_use]
    pub fn with_stroke_cap(mut self, cap: Cap) -> Self {
        self.stroke_cap = cap;
        self
    }

    /// Configures the background track.
    #[must_use]
    pub fn with_track(mut self, width: f64, color: Color, alpha: f32) -> Self {
        self.draw_track = true;
        self.track_width = width.max(0.0);
        self.track_color = color;
        self.track_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Disables the background track.
    #[must_use]
    pub fn without_track(mut self) -> Self {
        self.draw_track = false;
        self
    }

    /// Sets the divider gaps.
    #[must_use]
    pub fn with_dividers(mut self, dividers: Dividers) -> Self {
        self.dividers = dividers;
        self
    }

    /// Base angle of the first slice in degrees, before any divider offset.
    pub fn base_angle(&self) -> f64 {
        -90.0 + self.start_angle
    }

    /// Track color with `track_alpha` applied.
    pub fn track_paint(&self) -> Color {
        self.track_color.multiply_alpha(self.track_alpha)
    }
}

impl Default for PieStyle {
    fn default() -> Self {
        let stroke_width = 70.0;
        Self {
            start_angle: 0.0,
            stroke_width,
            stroke_cap: Cap::Butt,
            draw_track: true,
            track_width: stroke_width * 1.1,
            track_color: css::GRAY,
            track_alpha: 1.0,
            dividers: Dividers::HIDDEN,
        }
    }
}
