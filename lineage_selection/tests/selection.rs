// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lineage_selection` crate.
//!
//! These exercise the `DetailSelection<T>` API, with a focus on how the
//! detailed key, overlay transitions, and the revision counter interact.

use lineage_selection::{DetailSelection, OverlayTransition, SlideEdge};

#[test]
fn empty_selection_basics() {
    let sel = DetailSelection::<u32>::new();
    assert_eq!(sel.current(), None);
    assert!(!sel.is_visible());
    assert_eq!(sel.revision(), 0);
    assert_eq!(sel.slide_edge(), SlideEdge::Bottom);
}

#[test]
fn show_slides_in_and_bumps_revision() {
    let mut sel = DetailSelection::new();
    assert_eq!(sel.show(2_u32), OverlayTransition::SlideIn);
    assert_eq!(sel.current(), Some(&2));
    assert!(sel.is_visible());
    assert!(sel.is_current(&2));
    assert_eq!(sel.revision(), 1);

    // No-op: showing the same key again does not change anything.
    assert_eq!(sel.show(2), OverlayTransition::Unchanged);
    assert_eq!(sel.revision(), 1);
}

#[test]
fn showing_another_key_swaps_content() {
    let mut sel = DetailSelection::new();
    sel.show(2_u32);
    assert_eq!(sel.show(3), OverlayTransition::Swap);
    assert_eq!(sel.current(), Some(&3));
    assert!(!sel.is_current(&2));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn dismiss_slides_out_only_when_visible() {
    let mut sel = DetailSelection::<u32>::new();
    assert_eq!(sel.dismiss(), OverlayTransition::Unchanged);
    assert_eq!(sel.revision(), 0);

    sel.show(5);
    assert_eq!(sel.dismiss(), OverlayTransition::SlideOut);
    assert!(!sel.is_visible());
    assert_eq!(sel.revision(), 2);

    assert_eq!(sel.dismiss(), OverlayTransition::Unchanged);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn set_routes_to_show_or_dismiss() {
    let mut sel = DetailSelection::new();
    assert_eq!(sel.set(Some(4_u32)), OverlayTransition::SlideIn);
    assert_eq!(sel.set(Some(4)), OverlayTransition::Unchanged);
    assert_eq!(sel.set(None), OverlayTransition::SlideOut);
    assert_eq!(sel.set(None), OverlayTransition::Unchanged);
}

#[test]
fn visibility_follows_every_transition() {
    let mut sel = DetailSelection::new();
    let mut visible = sel.is_visible();
    for step in [Some(1_u32), Some(2), Some(2), None, None, Some(3)] {
        let transition = sel.set(step);
        if transition.toggles_visibility() {
            visible = !visible;
        }
        assert_eq!(sel.is_visible(), visible, "after {step:?}");
    }
}
