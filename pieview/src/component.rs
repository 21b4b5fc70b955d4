// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie components and label indexing.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use peniko::Color;

/// A labeled, weighted, colored slice of the pie.
///
/// `label` is the identity of the slice: transitions and legends match
/// components across lists by label, so labels must be unique within a list.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    /// Display label and identity key.
    pub label: String,
    /// Non-negative weight. Zero hides the slice without removing it.
    pub value: f64,
    /// Paint color for the slice and its legend swatch.
    pub color: Color,
}

impl Component {
    /// Creates a component.
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }

    /// Returns a copy of this component with a different value.
    #[must_use]
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            label: self.label.clone(),
            value,
            color: self.color,
        }
    }

    /// Whether the slice takes up any arc (and gets a divider).
    pub fn is_visible(&self) -> bool {
        self.value != 0.0
    }

    /// The built-in preview set, for design tools and edit modes.
    ///
    /// Hosts substitute this explicitly (see [`crate::PieLegend::preview`]); nothing
    /// in this crate falls back to it on its own.
    pub fn placeholders() -> Vec<Self> {
        alloc::vec![
            Self::new("Test1", 0.50, Color::from_rgb8(0xD5, 0x00, 0xF9)),
            Self::new("Test2", 1.0, Color::from_rgb8(0xF5, 0x00, 0x57)),
            Self::new("Test3", 0.33, Color::from_rgb8(0x29, 0x79, 0xFF)),
            Self::new("Test4", 0.17, Color::from_rgb8(0x76, 0xFF, 0x03)),
        ]
    }
}

/// Indexes components by label.
///
/// With duplicate labels the last component wins.
pub fn label_map(components: &[Component]) -> HashMap<&str, &Component> {
    components.iter().map(|c| (c.label.as_str(), c)).collect()
}

/// Collects the set of labels in a list.
pub fn label_set(components: &[Component]) -> HashSet<&str> {
    components.iter().map(|c| c.label.as_str()).collect()
}
