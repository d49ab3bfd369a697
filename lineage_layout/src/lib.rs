// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lineage_layout --heading-base-level=0

//! Lineage Layout: ahnentafel-indexed ancestry tree layout.
//!
//! This crate positions the people of a family tree on a fixed-size canvas.
//! Every person carries an [`Ahnentafel`] number: the subject is `1`, the
//! father of `n` is `2n` and the mother is `2n + 1`. Because the number alone
//! encodes both the generation and the left/right path from the subject, the
//! layout needs no explicit parent links.
//!
//! It focuses on:
//! - The [`Ahnentafel`] number type and its genealogical relations.
//! - [`Person`] records and the [`FamilySource`] trait that hands them to
//!   the layout and to higher layers.
//! - A pure layout pass, [`layout_tree`], mapping measured nodes to pixel
//!   placements inside a canvas sized for a perfect binary tree.
//!
//! It does **not** draw anything or measure cards. Callers are expected to:
//! - Measure their cards (all cards share one size) and pass each person with
//!   that size as a [`MeasuredNode`].
//! - Position their cards at the returned [`PlacedNode`] coordinates.
//! - Apply pan/zoom on top of the whole canvas (see `lineage_viewport`).
//!
//! ## Minimal example
//!
//! ```rust
//! use lineage_layout::{Ahnentafel, Person, PxSize, TreeLayoutConfig, layout_uniform};
//!
//! let people: Vec<Person> = (1..=15)
//!     .map(|n| Person::new("someone", Ahnentafel::new(n).unwrap()))
//!     .collect();
//!
//! let layout = layout_uniform(&people, PxSize::new(40, 40), &TreeLayoutConfig::default())
//!     .unwrap();
//!
//! // Four generations: eight leaf columns of 40px with nine 8px gaps.
//! assert_eq!(layout.size(), PxSize::new(392, 184));
//!
//! // The subject is centered in the top band.
//! let root = layout.get(Ahnentafel::ROOT).unwrap();
//! assert_eq!((root.x, root.y), (176, 0));
//! ```
//!
//! ## Geometry
//!
//! For `levels` generations and cards of `w x h` with spacings `sx`/`sy`:
//! - The canvas is `2^(levels-1) * w + (2^(levels-1) + 1) * sx` wide and
//!   `levels * h + (levels - 1) * sy` tall.
//! - Each generation occupies one band. With [`Orientation::RootAtTop`] the
//!   subject is at the top; [`Orientation::RootAtBottom`] flips the bands.
//! - Each step along the number's path halves the horizontal span, and the
//!   card is centered in the span that remains.
//!
//! Whole pixels are used throughout, and every division truncates, so
//! placements are identical between runs and across platforms.
//!
//! ## Errors
//!
//! [`layout_tree`] rejects empty input, duplicate numbers, and cards of
//! differing sizes with a [`LayoutError`] before computing anything.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ahnentafel;
mod error;
mod layout;
mod person;
pub mod source;

pub use ahnentafel::{Ahnentafel, Branch, Branches};
pub use error::LayoutError;
pub use layout::{
    MeasuredNode, Orientation, PlacedNode, PxSize, TreeLayout, TreeLayoutConfig, layout_tree,
    layout_uniform,
};
pub use person::Person;
pub use source::{Family, FamilySource};
