// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame interpolation of component values.
//!
//! The host owns the clock. Each frame it hands the driver an elapsed fraction in
//! `[0, 1]`; the driver writes intermediate values into the live component list.
//! Reaching `1` completes the animation and prunes slices that ended at zero.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;

use hashbrown::HashMap;
use tracing::{debug, trace, warn};

use crate::component::Component;
use crate::error::{PieError, PieResult};
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How a chart moves from one component list to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeAnimation {
    /// Every slot moves linearly from its start to its end value at once.
    Shift,
    /// Slots change one after another.
    Sequence,
    /// Slices slide around the ring.
    Slide,
    /// Slices slide with staggered starts.
    SlideStagger,
}

impl ChangeAnimation {
    /// Returns the interpolation strategy for this kind.
    ///
    /// Only [`ChangeAnimation::Shift`] has one today; the other kinds report
    /// [`PieError::UnsupportedAnimation`] instead of silently doing nothing.
    pub fn interpolation(self) -> PieResult<Box<dyn Interpolation>> {
        match self {
            Self::Shift => Ok(Box::new(ShiftInterpolation)),
            Self::Sequence | Self::Slide | Self::SlideStagger => {
                warn!(kind = ?self, "unsupported change animation");
                Err(PieError::UnsupportedAnimation(self))
            }
        }
    }
}

/// Maps a slot's start value, total change and elapsed fraction to its current value.
///
/// Strategies receive the slot index and count so staggered kinds can offset
/// their timing per slot.
pub trait Interpolation: fmt::Debug {
    /// Value of slot `index` (of `count`) at `fraction` in `[0, 1]`.
    fn value_at(
        &self,
        start: f64,
        delta: f64,
        fraction: f64,
        index: usize,
        count: usize,
    ) -> f64;
}

/// Linear interpolation of every slot at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShiftInterpolation;

impl Interpolation for ShiftInterpolation {
    fn value_at(&self, start: f64, delta: f64, fraction: f64, _: usize, _: usize) -> f64 {
        start + fraction * delta
    }
}

/// Lifecycle of an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Intermediate values are being written.
    Running,
    /// Final values were written and zero-valued slots pruned.
    Complete,
}

/// Drives one transition, frame by frame.
///
/// Built from the reconciled start list and the per-slot deltas. Dropping the
/// driver cancels the animation; the live list keeps whatever values the last
/// tick wrote.
pub struct AnimationDriver {
    start_values: HashMap<String, f64>,
    deltas: Vec<f64>,
    interpolation: Box<dyn Interpolation>,
    on_complete: Option<Box<dyn FnOnce()>>,
    state: AnimationState,
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("deltas", &self.deltas)
            .field("interpolation", &self.interpolation)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl AnimationDriver {
    /// Creates a driver, snapshotting the start value of every slot.
    pub fn new(
        start: &[Component],
        deltas: Vec<f64>,
        interpolation: Box<dyn Interpolation>,
    ) -> PieResult<Self> {
        if start.len() != deltas.len() {
            return Err(PieError::LengthMismatch {
                start: start.len(),
                end: deltas.len(),
            });
        }
        let start_values = start.iter().map(|c| (c.label.clone(), c.value)).collect();
        debug!(slots = deltas.len(), "animation started");
        Ok(Self {
            start_values,
            deltas,
            interpolation,
            on_complete: None,
            state: AnimationState::Running,
        })
    }

    /// Registers a callback run once, right before zero-valued slots are pruned.
    #[must_use]
    pub fn with_on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Per-slot deltas, aligned with the start list.
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    /// Writes the values for `fraction` into `components`.
    ///
    /// `fraction` is clamped to `[0, 1]`. At exactly `1` the driver completes:
    /// the completion callback runs, then every zero-valued component is removed.
    /// Zero values before completion stay in the list. Ticks after completion do
    /// nothing.
    ///
    /// Values are only written once every slot resolved, so an error leaves
    /// `components` untouched.
    pub fn tick(
        &mut self,
        components: &mut Vec<Component>,
        fraction: f64,
    ) -> PieResult<AnimationState> {
        if self.state == AnimationState::Complete {
            return Ok(AnimationState::Complete);
        }
        if components.len() != self.deltas.len() {
            return Err(PieError::LengthMismatch {
                start: components.len(),
                end: self.deltas.len(),
            });
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        let count = components.len();
        let values = components
            .iter()
            .zip(&self.deltas)
            .enumerate()
            .map(|(i, (c, &delta))| -> PieResult<f64> {
                let start = self.start_values.get(c.label.as_str()).ok_or_else(|| {
                    PieError::MissingLabel {
                        label: c.label.clone(),
                    }
                })?;
                Ok(self
                    .interpolation
                    .value_at(*start, delta, fraction, i, count))
            })
            .collect::<PieResult<Vec<_>>>()?;
        for (c, value) in components.iter_mut().zip(values) {
            c.value = value;
        }
        trace!(fraction, "animation tick");

        if fraction == 1.0 {
            self.state = AnimationState::Complete;
            if let Some(on_complete) = self.on_complete.take() {
                on_complete();
            }
            components.retain(Component::is_visible);
            debug!(
                pruned = count - components.len(),
                remaining = components.len(),
                "animation complete"
            );
        }
        Ok(self.state)
    }
}

/// Easing applied to linear elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Progress equals elapsed time.
    Linear,
    /// Slow start and end, fast middle: `cos((t + 1)π) / 2 + 0.5`.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Eases `t` in `[0, 1]`; the end points map to themselves.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Converts host clock time into animation fractions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    /// Total animation time.
    pub duration_ms: u64,
    /// Easing applied to elapsed time.
    pub easing: Easing,
}

impl AnimationClock {
    /// A clock for `duration_ms` with the default easing.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Sets the easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fraction after `elapsed_ms`; `1` once the duration has passed.
    pub fn fraction_at(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return 1.0;
        }
        self.easing
            .apply(elapsed_ms as f64 / self.duration_ms as f64)
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(500)
    }
}
