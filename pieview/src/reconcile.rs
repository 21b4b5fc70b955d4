// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label-aligned transitions between two component lists.
//!
//! Animating from one list to another only works slot by slot, so both ends of
//! a transition must contain the same labels in the same order. Labels that
//! appear grow in from a zero-valued placeholder; labels that disappear shrink
//! out to one.

extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::component::{Component, label_map, label_set};
use crate::error::{PieError, PieResult};

/// Start and end lists of a transition, index-aligned by label.
#[derive(Clone, Debug, PartialEq)]
pub struct ReconciledPair {
    /// Values at the start of the transition.
    pub start: Vec<Component>,
    /// Values at the end of the transition.
    pub end: Vec<Component>,
}

impl ReconciledPair {
    /// Per-slot value change: `end[i].value - start(end[i].label).value`.
    ///
    /// A label with no start value means the pair was not produced by
    /// [`reconcile`] (or was edited since); this is reported, never defaulted.
    pub fn deltas(&self) -> PieResult<Vec<f64>> {
        if self.start.len() != self.end.len() {
            return Err(PieError::LengthMismatch {
                start: self.start.len(),
                end: self.end.len(),
            });
        }
        let start = label_map(&self.start);
        self.end
            .iter()
            .map(|target| {
                start
                    .get(target.label.as_str())
                    .map(|from| target.value - from.value)
                    .ok_or_else(|| PieError::MissingLabel {
                        label: target.label.clone(),
                    })
            })
            .collect()
    }

    /// Number of slots in the transition.
    pub fn len(&self) -> usize {
        self.start.len()
    }

    /// Whether the transition has no slots.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }
}

/// Aligns `old` and `new` by label.
///
/// When both lists hold the same labels in the same order they are returned
/// unchanged. Otherwise:
/// - labels only in `new` are appended to `start` with value `0`,
/// - labels only in `old` are inserted into `end` at their old position with
///   value `0`,
/// - `end` is reordered to follow `start` if shared labels disagree on order.
pub fn reconcile(old: &[Component], new: &[Component]) -> ReconciledPair {
    let old_labels = label_set(old);
    let new_labels = label_set(new);

    if old_labels == new_labels {
        debug!(len = old.len(), "reconcile: label sets match");
        let start = old.to_vec();
        let end = follow_order(&start, new.to_vec());
        return ReconciledPair { start, end };
    }

    let mut start = old.to_vec();
    start.extend(
        new.iter()
            .filter(|c| !old_labels.contains(c.label.as_str()))
            .map(|c| c.with_value(0.0)),
    );

    let mut end = new.to_vec();
    for (i, c) in old.iter().enumerate() {
        if !new_labels.contains(c.label.as_str()) {
            end.insert(i.min(end.len()), c.with_value(0.0));
        }
    }
    let end = follow_order(&start, end);

    debug!(
        appeared = start.len() - old.len(),
        disappeared = end.len() - new.len(),
        "reconcile: start={start:?} end={end:?}"
    );
    ReconciledPair { start, end }
}

/// Reorders `end` to follow the label order of `start` when the two disagree.
fn follow_order(start: &[Component], end: Vec<Component>) -> Vec<Component> {
    if is_aligned(start, &end) {
        return end;
    }
    debug!("reconcile: end list reordered to follow start order");
    let targets = label_map(&end);
    start
        .iter()
        .filter_map(|c| targets.get(c.label.as_str()).map(|t| (*t).clone()))
        .collect()
}

fn is_aligned(start: &[Component], end: &[Component]) -> bool {
    start.len() == end.len() && start.iter().zip(end).all(|(a, b)| a.label == b.label)
}
