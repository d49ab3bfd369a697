// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lineage_viewport --heading-base-level=0

//! Lineage Viewport: pan/zoom state for a tree canvas.
//!
//! This crate provides a small, headless model of the transform applied to a
//! laid-out family tree. The tree is drawn as one canvas; the viewport centers
//! that canvas in the view, scales it about its own center, and translates it
//! by the accumulated pan. It focuses on:
//! - Merging continuous gesture input (a multiplicative zoom change and an
//!   additive pan change) into running state.
//! - Coordinate conversion between canvas (world) and view (device) space,
//!   which hosts need to hit-test taps.
//! - Fitting and centering helpers.
//! - Opt-in zoom limits and pan clamping. Neither is enabled by default.
//! - A [`TransformState`] snapshot hosts can persist across relaunch.
//!
//! It does **not** recognize gestures or render anything. Callers are
//! expected to turn pointer input into deltas (see `lineage_shell`) and apply
//! [`TreeViewport::transform`] when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use lineage_viewport::TreeViewport;
//!
//! let mut view = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! view.set_content_size(Size::new(392.0, 184.0));
//!
//! // One pinch update: zoom in by 10% while dragging right.
//! view.apply_gesture(1.1, Vec2::new(12.0, 0.0));
//!
//! // Map a tap back into canvas coordinates for hit testing.
//! let tap = Point::new(400.0, 300.0);
//! let on_canvas = view.view_to_world_point(tap).unwrap();
//! assert!(on_canvas.x < 196.0);
//! ```
//!
//! ## Design notes
//!
//! - The zoom is uniform and there is no rotation.
//! - A zero or non-finite scale has no inverse; conversions into world space
//!   then return `None` rather than producing NaNs.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod state;
mod viewport;

pub use modes::ClampMode;
pub use state::TransformState;
pub use viewport::{TreeViewport, TreeViewportDebugInfo};
