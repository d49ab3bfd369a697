// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::ahnentafel::Ahnentafel;
use crate::layout::PxSize;

/// Error returned when a node set cannot be laid out.
///
/// All variants describe an invalid input shape. Layout is rejected before any
/// placement math runs; nodes are never dropped or renumbered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The node set was empty.
    Empty,
    /// A raw index was zero, negative, or too large for an [`Ahnentafel`].
    InvalidAhnentafel(i64),
    /// Two nodes share the same ahnentafel number.
    DuplicateAhnentafel(Ahnentafel),
    /// A node was measured at a different size than the first node.
    NonUniformSize {
        /// The offending node.
        ahnentafel: Ahnentafel,
        /// Size of the first node.
        expected: PxSize,
        /// Size of the offending node.
        found: PxSize,
    },
    /// The canvas for this many generations does not fit in `u32` pixels.
    CanvasTooLarge {
        /// Number of generations present in the node set.
        levels: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("cannot lay out an empty tree"),
            Self::InvalidAhnentafel(n) => {
                write!(f, "{n} is not a valid ahnentafel number")
            }
            Self::DuplicateAhnentafel(n) => {
                write!(f, "ahnentafel number {n} appears more than once")
            }
            Self::NonUniformSize {
                ahnentafel,
                expected,
                found,
            } => write!(
                f,
                "node {ahnentafel} measured {}x{}, expected {}x{}",
                found.width, found.height, expected.width, expected.height
            ),
            Self::CanvasTooLarge { levels } => {
                write!(f, "a canvas for {levels} generations overflows u32 pixels")
            }
        }
    }
}

impl core::error::Error for LayoutError {}
