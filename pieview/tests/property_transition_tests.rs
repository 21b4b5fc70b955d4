// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use peniko::Color;
use pieview::{
    AnimationDriver, AnimationState, ChangeAnimation, Component, ShiftInterpolation, reconcile,
};
use proptest::prelude::*;

const POOL: usize = 12;

/// Picks a subset of `L0..L11` with values; `reverse` flips the order.
fn list() -> impl Strategy<Value = Vec<Component>> {
    (
        prop::collection::vec(prop::option::of(0.5f64..50.0), POOL),
        any::<bool>(),
    )
        .prop_map(|(slots, reverse)| {
            let mut list: Vec<Component> = slots
                .into_iter()
                .enumerate()
                .filter_map(|(i, v)| v.map(|v| Component::new(format!("L{i}"), v, Color::BLACK)))
                .collect();
            if reverse {
                list.reverse();
            }
            list
        })
}

fn by_label(list: &[Component]) -> HashMap<String, f64> {
    list.iter().map(|c| (c.label.clone(), c.value)).collect()
}

proptest! {
    #[test]
    fn reconcile_with_itself_is_identity(l in list()) {
        let pair = reconcile(&l, &l);
        prop_assert_eq!(&pair.start, &l);
        prop_assert_eq!(&pair.end, &l);
    }

    #[test]
    fn reconciled_lists_are_aligned(old in list(), new in list()) {
        let pair = reconcile(&old, &new);
        prop_assert_eq!(pair.start.len(), pair.end.len());
        for (s, e) in pair.start.iter().zip(&pair.end) {
            prop_assert_eq!(&s.label, &e.label);
        }

        let old_values = by_label(&old);
        let new_values = by_label(&new);
        for (s, e) in pair.start.iter().zip(&pair.end) {
            prop_assert!(old_values.contains_key(&s.label) || new_values.contains_key(&s.label));
            prop_assert_eq!(s.value, old_values.get(&s.label).copied().unwrap_or(0.0));
            prop_assert_eq!(e.value, new_values.get(&e.label).copied().unwrap_or(0.0));
        }
        prop_assert!(pair.deltas().is_ok());
    }

    #[test]
    fn animation_hits_both_ends(old in list(), new in list()) {
        let pair = reconcile(&old, &new);
        let deltas = pair.deltas().unwrap();
        let mut live = pair.start.clone();
        let mut driver =
            AnimationDriver::new(&pair.start, deltas, Box::new(ShiftInterpolation)).unwrap();

        prop_assert_eq!(driver.tick(&mut live, 0.0).unwrap(), AnimationState::Running);
        prop_assert_eq!(&live, &pair.start);

        prop_assert_eq!(driver.tick(&mut live, 1.0).unwrap(), AnimationState::Complete);
        let expected: Vec<&Component> = pair.end.iter().filter(|c| c.value != 0.0).collect();
        prop_assert_eq!(live.len(), expected.len());
        for (got, want) in live.iter().zip(expected) {
            prop_assert_eq!(&got.label, &want.label);
            assert_abs_diff_eq!(got.value, want.value, epsilon = 1e-9);
        }
    }
}

#[test]
fn grow_and_shrink_scenario() {
    let red = Color::from_rgb8(0xFF, 0, 0);
    let blue = Color::from_rgb8(0, 0, 0xFF);
    let green = Color::from_rgb8(0, 0x80, 0);
    let old = vec![Component::new("A", 1.0, red), Component::new("B", 1.0, blue)];
    let new = vec![Component::new("B", 2.0, blue), Component::new("C", 1.0, green)];

    let pair = reconcile(&old, &new);
    let start: Vec<(&str, f64)> = pair.start.iter().map(|c| (c.label.as_str(), c.value)).collect();
    let end: Vec<(&str, f64)> = pair.end.iter().map(|c| (c.label.as_str(), c.value)).collect();
    assert_eq!(start, [("A", 1.0), ("B", 1.0), ("C", 0.0)]);
    assert_eq!(end, [("A", 0.0), ("B", 2.0), ("C", 1.0)]);
    assert_eq!(pair.deltas().unwrap(), [-1.0, 1.0, 1.0]);
}

#[test]
fn unsupported_kinds_are_reported() {
    for kind in [
        ChangeAnimation::Sequence,
        ChangeAnimation::Slide,
        ChangeAnimation::SlideStagger,
    ] {
        assert!(kind.interpolation().is_err());
    }
    assert!(ChangeAnimation::Shift.interpolation().is_ok());
}
