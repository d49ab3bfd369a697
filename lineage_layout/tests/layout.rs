// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lineage_layout` crate.
//!
//! These pin the canvas arithmetic on small hand-checked trees and the
//! rejection of malformed node sets.

use kurbo::Point;
use lineage_layout::{
    Ahnentafel, LayoutError, MeasuredNode, Orientation, Person, PxSize, TreeLayoutConfig,
    layout_tree, layout_uniform,
};

const CARD: PxSize = PxSize::new(40, 40);

fn a(n: u32) -> Ahnentafel {
    Ahnentafel::new(n).unwrap()
}

fn complete_tree(depth: u32) -> Vec<Person> {
    (1..(1_u32 << depth))
        .map(|n| Person::new(format!("person {n}"), a(n)))
        .collect()
}

#[test]
fn four_generation_canvas_and_placements() {
    let layout = layout_uniform(&complete_tree(4), CARD, &TreeLayoutConfig::default()).unwrap();

    assert_eq!(layout.levels(), 4);
    assert_eq!(layout.leaf_columns(), 8);
    assert_eq!(layout.size(), PxSize::new(392, 184));

    let expect = [
        (1, 176, 0),
        (2, 78, 48),
        (3, 274, 48),
        (4, 29, 96),
        (5, 127, 96),
        (6, 225, 96),
        (7, 323, 96),
        (8, 4, 144),
        (9, 53, 144),
        (15, 347, 144),
    ];
    for (n, x, y) in expect {
        let node = layout.get(a(n)).unwrap();
        assert_eq!((node.x, node.y), (x, y), "placement of {n}");
    }
}

#[test]
fn leaves_are_evenly_spaced_left_to_right() {
    let layout = layout_uniform(&complete_tree(4), CARD, &TreeLayoutConfig::default()).unwrap();
    let xs: Vec<u32> = (8..=15).map(|n| layout.get(a(n)).unwrap().x).collect();
    for pair in xs.windows(2) {
        assert_eq!(pair[1] - pair[0], 49);
    }
    assert!(
        (8..=15).all(|n| layout.get(a(n)).unwrap().y == 144),
        "leaves share the bottom band"
    );
}

#[test]
fn single_node_is_centered_with_edge_spacing() {
    let people = [Person::new("Tanner Harding", Ahnentafel::ROOT)];
    let layout = layout_uniform(&people, PxSize::new(48, 60), &TreeLayoutConfig::default()).unwrap();

    assert_eq!(layout.levels(), 1);
    assert_eq!(layout.size(), PxSize::new(48 + 2 * 8, 60));
    let root = layout.get(Ahnentafel::ROOT).unwrap();
    assert_eq!((root.x, root.y), (8, 0));
}

#[test]
fn sparse_trees_reserve_slots_for_missing_ancestors() {
    // Only the paternal line: 1, 2, 4, 8.
    let people: Vec<Person> = [1, 2, 4, 8]
        .into_iter()
        .map(|n| Person::new("Harding", a(n)))
        .collect();
    let layout = layout_uniform(&people, CARD, &TreeLayoutConfig::default()).unwrap();

    assert_eq!(layout.size().width, 392);
    assert_eq!(layout.get(a(8)).unwrap().x, 4);
    assert_eq!(layout.get(a(2)).unwrap().x, 78);
}

#[test]
fn placements_keep_input_order_and_index() {
    let people: Vec<Person> = [3, 1, 2]
        .into_iter()
        .map(|n| Person::new("x", a(n)))
        .collect();
    let layout = layout_uniform(&people, CARD, &TreeLayoutConfig::default()).unwrap();

    let order: Vec<(usize, u32)> = layout.iter().map(|n| (n.index, n.ahnentafel.get())).collect();
    assert_eq!(order, [(0, 3), (1, 1), (2, 2)]);
}

#[test]
fn orientation_flips_bands_but_not_columns() {
    let people = complete_tree(3);
    let top = layout_uniform(&people, CARD, &TreeLayoutConfig::default()).unwrap();
    let bottom = layout_uniform(
        &people,
        CARD,
        &TreeLayoutConfig::default().with_orientation(Orientation::RootAtBottom),
    )
    .unwrap();

    assert_eq!(top.size(), bottom.size());
    let height = top.size().height;
    for (t, b) in top.iter().zip(bottom.iter()) {
        assert_eq!(t.x, b.x);
        assert_eq!(t.y, height - b.y - CARD.height);
    }
}

#[test]
fn layout_is_repeatable() {
    let people = complete_tree(5);
    let config = TreeLayoutConfig::default().with_spacing(3);
    let first = layout_uniform(&people, PxSize::new(37, 21), &config).unwrap();
    let second = layout_uniform(&people, PxSize::new(37, 21), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn node_at_hits_card_boxes_only() {
    let layout = layout_uniform(&complete_tree(2), CARD, &TreeLayoutConfig::default()).unwrap();
    let root = *layout.get(Ahnentafel::ROOT).unwrap();

    let inside = Point::new(f64::from(root.x) + 1.0, f64::from(root.y) + 1.0);
    assert_eq!(layout.node_at(inside).map(|n| n.ahnentafel), Some(Ahnentafel::ROOT));
    assert_eq!(layout.node_at(Point::new(0.0, 0.0)), None);
    assert!(layout.bounds().contains(inside));
}

#[test]
fn empty_input_is_rejected() {
    let err = layout_tree(&[], &TreeLayoutConfig::default()).unwrap_err();
    assert_eq!(err, LayoutError::Empty);
}

#[test]
fn duplicate_numbers_are_rejected() {
    let people = [Person::new("a", a(2)), Person::new("b", a(3)), Person::new("c", a(2))];
    let err = layout_uniform(&people, CARD, &TreeLayoutConfig::default()).unwrap_err();
    assert_eq!(err, LayoutError::DuplicateAhnentafel(a(2)));
}

#[test]
fn non_positive_numbers_are_rejected_at_the_boundary() {
    assert_eq!(
        Person::try_new("nobody", 0).unwrap_err(),
        LayoutError::InvalidAhnentafel(0)
    );
    assert_eq!(
        Person::try_new("nobody", -1).unwrap_err(),
        LayoutError::InvalidAhnentafel(-1)
    );
}

#[test]
fn mixed_card_sizes_are_rejected() {
    let people = [Person::new("a", a(1)), Person::new("b", a(2))];
    let nodes = [
        MeasuredNode::new(&people[0], CARD),
        MeasuredNode::new(&people[1], PxSize::new(40, 52)),
    ];
    let err = layout_tree(&nodes, &TreeLayoutConfig::default()).unwrap_err();
    assert_eq!(
        err,
        LayoutError::NonUniformSize {
            ahnentafel: a(2),
            expected: CARD,
            found: PxSize::new(40, 52),
        }
    );
    assert_eq!(err.to_string(), "node 2 measured 40x52, expected 40x40");
}
