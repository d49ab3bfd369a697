// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ahnentafel tree layout pass.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::ahnentafel::{Ahnentafel, Branch};
use crate::error::LayoutError;
use crate::person::Person;
use crate::source::check_unique;

/// Integer size in device-independent pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PxSize {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts to a Kurbo size.
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Which edge of the canvas the subject (number 1) is placed against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Subject in the top band, each older generation one band lower.
    #[default]
    RootAtTop,
    /// Subject in the bottom band, ancestors stacked upward.
    RootAtBottom,
}

/// Spacing and orientation for [`layout_tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeLayoutConfig {
    /// Gap between generation bands.
    pub vertical_spacing: u32,
    /// Gap between leaf columns, and on both outer edges.
    pub horizontal_spacing: u32,
    /// Where the subject goes.
    pub orientation: Orientation,
}

impl Default for TreeLayoutConfig {
    fn default() -> Self {
        Self {
            vertical_spacing: 8,
            horizontal_spacing: 8,
            orientation: Orientation::default(),
        }
    }
}

impl TreeLayoutConfig {
    /// Returns a copy with both spacings set to `spacing`.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: u32) -> Self {
        self.vertical_spacing = spacing;
        self.horizontal_spacing = spacing;
        self
    }

    /// Returns a copy with the given orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// A person paired with the size its card measured at.
#[derive(Copy, Clone, Debug)]
pub struct MeasuredNode<'a> {
    /// The person drawn by this node.
    pub person: &'a Person,
    /// Measured card size.
    pub size: PxSize,
}

impl<'a> MeasuredNode<'a> {
    /// Pairs a person with a measured size.
    #[must_use]
    pub const fn new(person: &'a Person, size: PxSize) -> Self {
        Self { person, size }
    }
}

/// Placement of one input node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlacedNode {
    /// Position of the node in the input sequence.
    pub index: usize,
    /// The node's ahnentafel number.
    pub ahnentafel: Ahnentafel,
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Node size.
    pub size: PxSize,
}

impl PlacedNode {
    /// Returns the node's box in canvas coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(f64::from(self.x), f64::from(self.y)),
            self.size.to_size(),
        )
    }

    /// Returns the generation of this node.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.ahnentafel.depth()
    }
}

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeLayout {
    size: PxSize,
    levels: u32,
    leaf_columns: u32,
    nodes: Vec<PlacedNode>,
}

impl TreeLayout {
    /// Returns the canvas size.
    #[must_use]
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Returns the canvas bounds, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size.to_size())
    }

    /// Returns the number of generations present.
    #[must_use]
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Returns the number of slots in the deepest generation.
    #[must_use]
    pub fn leaf_columns(&self) -> u32 {
        self.leaf_columns
    }

    /// Returns the placements in input order.
    #[must_use]
    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    /// Iterates the placements in input order.
    pub fn iter(&self) -> core::slice::Iter<'_, PlacedNode> {
        self.nodes.iter()
    }

    /// Looks up the placement of a given number.
    #[must_use]
    pub fn get(&self, ahnentafel: Ahnentafel) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.ahnentafel == ahnentafel)
    }

    /// Returns the node whose box contains `pt`, in canvas coordinates.
    ///
    /// Boxes are half-open, so a point on the shared edge of two boxes hits
    /// only the one to its right or below.
    #[must_use]
    pub fn node_at(&self, pt: Point) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| {
            let r = n.rect();
            pt.x >= r.x0 && pt.x < r.x1 && pt.y >= r.y0 && pt.y < r.y1
        })
    }
}

impl<'a> IntoIterator for &'a TreeLayout {
    type Item = &'a PlacedNode;
    type IntoIter = core::slice::Iter<'a, PlacedNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Lays out measured nodes as a perfect binary ancestry tree.
///
/// Generations occupy equal horizontal bands. The deepest generation present
/// gets `2^(levels - 1)` equal columns, and every shallower node is centered
/// over the span its ancestors would occupy. The bits of a node's number after
/// the leading `1` pick the left (father) or right (mother) half at each step.
///
/// All arithmetic is in whole pixels and every division truncates.
///
/// # Errors
///
/// Fails without placing anything when `nodes` is empty, when two nodes share
/// a number, when a node's size differs from the first node's, or when the
/// canvas would overflow `u32`.
pub fn layout_tree(
    nodes: &[MeasuredNode<'_>],
    config: &TreeLayoutConfig,
) -> Result<TreeLayout, LayoutError> {
    let first = nodes.first().ok_or(LayoutError::Empty)?;
    let node_size = first.size;
    check_unique(nodes.iter().map(|n| n.person.ahnentafel()))?;
    if let Some(odd) = nodes.iter().find(|n| n.size != node_size) {
        return Err(LayoutError::NonUniformSize {
            ahnentafel: odd.person.ahnentafel(),
            expected: node_size,
            found: odd.size,
        });
    }

    let levels = nodes
        .iter()
        .map(|n| n.person.depth())
        .max()
        .unwrap_or(1);
    let canvas = Canvas::new(levels, node_size, config)?;

    let placed: Vec<PlacedNode> = nodes
        .iter()
        .enumerate()
        .map(|(index, n)| canvas.place(index, n.person.ahnentafel()))
        .collect();

    tracing::debug!(
        nodes = placed.len(),
        levels,
        width = canvas.width,
        height = canvas.height,
        "tree layout pass"
    );

    Ok(TreeLayout {
        size: PxSize::new(canvas.width, canvas.height),
        levels,
        leaf_columns: canvas.leaf_columns,
        nodes: placed,
    })
}

/// Lays out people that all share one card size.
///
/// # Errors
///
/// See [`layout_tree`].
pub fn layout_uniform(
    people: &[Person],
    size: PxSize,
    config: &TreeLayoutConfig,
) -> Result<TreeLayout, LayoutError> {
    let nodes: Vec<MeasuredNode<'_>> = people
        .iter()
        .map(|person| MeasuredNode::new(person, size))
        .collect();
    layout_tree(&nodes, config)
}

/// Canvas geometry shared by every placement of one pass.
struct Canvas {
    width: u32,
    height: u32,
    leaf_columns: u32,
    node: PxSize,
    vertical_spacing: u32,
    orientation: Orientation,
}

impl Canvas {
    fn new(levels: u32, node: PxSize, config: &TreeLayoutConfig) -> Result<Self, LayoutError> {
        let too_large = || LayoutError::CanvasTooLarge { levels };

        let leaf_columns = 1_u64 << (levels - 1);
        let rows = u64::from(levels);
        let height = rows
            .checked_mul(u64::from(node.height))
            .zip((rows - 1).checked_mul(u64::from(config.vertical_spacing)))
            .and_then(|(cards, gaps)| cards.checked_add(gaps));
        let width = leaf_columns
            .checked_mul(u64::from(node.width))
            .zip((leaf_columns + 1).checked_mul(u64::from(config.horizontal_spacing)))
            .and_then(|(cards, gaps)| cards.checked_add(gaps));

        Ok(Self {
            width: width
                .and_then(|w| u32::try_from(w).ok())
                .ok_or_else(too_large)?,
            height: height
                .and_then(|h| u32::try_from(h).ok())
                .ok_or_else(too_large)?,
            leaf_columns: u32::try_from(leaf_columns).map_err(|_| too_large())?,
            node,
            vertical_spacing: config.vertical_spacing,
            orientation: config.orientation,
        })
    }

    fn place(&self, index: usize, ahnentafel: Ahnentafel) -> PlacedNode {
        let depth = ahnentafel.depth();
        // Each term is at most `height`, which already fits in u32, and the
        // sums never exceed it.
        let y = match self.orientation {
            Orientation::RootAtTop => {
                (depth - 1) * self.node.height + (depth - 1) * self.vertical_spacing
            }
            Orientation::RootAtBottom => {
                self.height - depth * self.node.height - (depth - 1) * self.vertical_spacing
            }
        };

        let mut x = 0;
        let mut column_width = self.width;
        for branch in ahnentafel.branches() {
            column_width /= 2;
            if branch == Branch::Mother {
                x += column_width;
            }
        }
        x += (column_width - self.node.width) / 2;

        PlacedNode {
            index,
            ahnentafel,
            x,
            y,
            size: self.node,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Orientation, PxSize, TreeLayoutConfig, layout_uniform};
    use crate::{Ahnentafel, LayoutError, Person};

    fn people(range: core::ops::RangeInclusive<u32>) -> Vec<Person> {
        range
            .map(|n| Person::new("p", Ahnentafel::new(n).unwrap()))
            .collect()
    }

    #[test]
    fn repeated_halving_matches_power_of_two_division() {
        // `w / 2 / 2 == w / 4` for unsigned integers, so halving the column
        // per step reproduces `total_width / 2^(i+1)` exactly.
        let layout = layout_uniform(
            &people(1..=15),
            PxSize::new(40, 40),
            &TreeLayoutConfig::default(),
        )
        .unwrap();
        let w = layout.size().width;
        let n = layout.get(Ahnentafel::new(13).unwrap()).unwrap();
        // 13 = 0b1101: mother, father, mother.
        let expected = w / 2 + w / 8 + (w / 8 - 40) / 2;
        assert_eq!(n.x, expected);
    }

    #[test]
    fn root_at_bottom_places_subject_in_last_band() {
        let config = TreeLayoutConfig::default().with_orientation(Orientation::RootAtBottom);
        let layout = layout_uniform(&people(1..=7), PxSize::new(40, 30), &config).unwrap();
        assert_eq!(layout.size().height, 3 * 30 + 2 * 8);
        assert_eq!(layout.get(Ahnentafel::ROOT).unwrap().y, 76);
        assert_eq!(layout.get(Ahnentafel::new(2).unwrap()).unwrap().y, 38);
        assert_eq!(layout.get(Ahnentafel::new(7).unwrap()).unwrap().y, 0);
    }

    #[test]
    fn zero_sized_cards_still_lay_out() {
        let layout =
            layout_uniform(&people(1..=3), PxSize::new(0, 0), &TreeLayoutConfig::default())
                .unwrap();
        assert_eq!(layout.size(), PxSize::new(24, 8));
        assert_eq!(layout.get(Ahnentafel::ROOT).unwrap().x, 12);
    }

    #[test]
    fn deep_trees_report_overflow() {
        let deep = [Person::new("far", Ahnentafel::new(u32::MAX).unwrap())];
        let err = layout_uniform(&deep, PxSize::new(40, 40), &TreeLayoutConfig::default());
        assert_eq!(err, Err(LayoutError::CanvasTooLarge { levels: 32 }));
    }

    #[test]
    fn single_generation_with_tallest_card_fits() {
        let tall = PxSize::new(40, u32::MAX - 4);
        let root = [Person::new("x", Ahnentafel::ROOT)];
        for orientation in [Orientation::RootAtTop, Orientation::RootAtBottom] {
            let config = TreeLayoutConfig::default().with_orientation(orientation);
            let layout = layout_uniform(&root, tall, &config).unwrap();
            assert_eq!(layout.size(), PxSize::new(56, u32::MAX - 4));
            let node = layout.get(Ahnentafel::ROOT).unwrap();
            assert_eq!((node.x, node.y), (8, 0));
        }
    }
}
