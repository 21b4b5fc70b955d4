// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component values to arc sweeps.

extern crate alloc;

use alloc::vec::Vec;

use crate::component::Component;
use crate::style::Dividers;

/// Share of the total and arc sweep of one component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleEntry {
    /// `value / total`, or `0` when the total is zero.
    pub fraction: f64,
    /// Sweep in degrees: `fraction * available_degrees`.
    pub degrees: f64,
}

/// Sum of all component values.
pub fn total_value(components: &[Component]) -> f64 {
    components.iter().map(|c| c.value).sum()
}

/// Degrees left for slices once divider gaps are reserved.
///
/// One gap is reserved per visible (non-zero) component. When the gaps alone
/// fill the circle nothing is left, and every slice gets `0` degrees.
pub fn available_degrees(components: &[Component], dividers: Dividers) -> f64 {
    let visible = components.iter().filter(|c| c.is_visible()).count();
    (360.0 - dividers.reserved_degrees(visible)).max(0.0)
}

/// Computes `(fraction, degrees)` for every component, in input order.
///
/// A zero total yields all-zero entries instead of `NaN`.
pub fn calculate_angles(components: &[Component], dividers: Dividers) -> Vec<AngleEntry> {
    let total = total_value(components);
    if total == 0.0 {
        return alloc::vec![AngleEntry::default(); components.len()];
    }
    let available = available_degrees(components, dividers);
    components
        .iter()
        .map(|c| {
            let fraction = c.value / total;
            AngleEntry {
                fraction,
                degrees: fraction * available,
            }
        })
        .collect()
}
