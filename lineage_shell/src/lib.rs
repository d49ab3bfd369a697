// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lineage_shell --heading-base-level=0

//! Lineage Shell: the interactive layer over a laid-out family tree.
//!
//! This crate composes the other Lineage crates into one headless state
//! machine a host UI can drive from its event loop:
//!
//! - A [`FamilySource`](lineage_layout::FamilySource) handed over at
//!   construction, laid out with `lineage_layout` whenever the source, card
//!   size, or spacing changes.
//! - A [`TreeViewport`](lineage_viewport::TreeViewport) that centers the tree
//!   canvas in the view and accumulates pan/zoom.
//! - A [`gesture::TransformGesture`] recognizer turning pointer input into
//!   pan/zoom deltas and taps.
//! - A [`DetailSelection`](lineage_selection::DetailSelection) holding the
//!   person whose detail overlay is shown.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lineage_layout::{Ahnentafel, Family, Person};
//! use lineage_selection::OverlayTransition;
//! use lineage_shell::{ShellConfig, TreeShell};
//!
//! let family = Family::new([
//!     Person::new("Tanner Harding", Ahnentafel::ROOT),
//!     Person::new("Robert Harding", Ahnentafel::new(2).unwrap()),
//!     Person::new("Kathy Cottle", Ahnentafel::new(3).unwrap()),
//! ])
//! .unwrap();
//!
//! let view = Rect::new(0.0, 0.0, 360.0, 640.0);
//! let mut shell = TreeShell::new(family, view, ShellConfig::default()).unwrap();
//!
//! // Tap the center of Robert's card.
//! let (_, card) = shell
//!     .cards()
//!     .find(|(p, _)| p.name() == "Robert Harding")
//!     .unwrap();
//! assert_eq!(shell.tap_at(card.center()), OverlayTransition::SlideIn);
//! assert_eq!(shell.detail_title().as_deref(), Some("Details for Robert Harding"));
//!
//! // Back navigation hides the overlay.
//! assert_eq!(shell.back(), OverlayTransition::SlideOut);
//! assert!(!shell.overlay_visible());
//! ```
//!
//! Nothing here bounds zoom or pan unless the host opts in through
//! [`TreeShell::viewport_mut`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gesture;
mod shell;

pub use shell::{ShellConfig, ShellEvent, TreeShell};
