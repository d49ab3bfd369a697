// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lineage_selection --heading-base-level=0

//! Lineage Selection: the "currently detailed" item and its overlay.
//!
//! A family tree viewer shows at most one person's details at a time. Tapping
//! a card opens a detail overlay that slides in from the bottom edge; the back
//! action slides it out again. This crate keeps the _bookkeeping_ for that:
//! - The single detailed key, if any.
//! - A monotonically increasing **revision** counter that bumps when the key
//!   changes.
//! - The [`OverlayTransition`] each change implies, so a host can start the
//!   matching animation without diffing state itself.
//!
//! Visibility is derived purely from presence: the overlay is visible exactly
//! when a key is held. Timing curves and drawing are left to the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use lineage_selection::{DetailSelection, OverlayTransition};
//!
//! // Using u32 as a stand-in for an ahnentafel number.
//! let mut detail = DetailSelection::<u32>::new();
//!
//! // Tap on a card.
//! assert_eq!(detail.show(2), OverlayTransition::SlideIn);
//! assert!(detail.is_visible());
//!
//! // Tap on another card while the overlay is up.
//! assert_eq!(detail.show(3), OverlayTransition::Swap);
//!
//! // Back navigation.
//! assert_eq!(detail.dismiss(), OverlayTransition::SlideOut);
//! assert_eq!(detail.current(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// The screen edge the overlay enters from and exits to.
///
/// The overlay is offset by its own full height along this edge at the start
/// of [`OverlayTransition::SlideIn`] and at the end of
/// [`OverlayTransition::SlideOut`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlideEdge {
    /// Slide vertically from/to below the view.
    #[default]
    Bottom,
}

/// Visual change implied by a selection update.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayTransition {
    /// Nothing changed.
    Unchanged,
    /// The overlay was hidden and now shows a key.
    SlideIn,
    /// The overlay was showing and is now hidden.
    SlideOut,
    /// The overlay stays up but shows a different key.
    Swap,
}

impl OverlayTransition {
    /// Returns `true` if the overlay's visibility flipped.
    #[must_use]
    pub fn toggles_visibility(self) -> bool {
        matches!(self, Self::SlideIn | Self::SlideOut)
    }
}

/// Holds at most one detailed key plus a revision counter.
///
/// Only `PartialEq` is required of `T`, so generational handles and plain
/// integer IDs both work.
#[derive(Clone, Debug)]
pub struct DetailSelection<T> {
    current: Option<T>,
    edge: SlideEdge,
    revision: u64,
}

impl<T> Default for DetailSelection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DetailSelection<T> {
    /// Creates an empty selection with the overlay hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            edge: SlideEdge::Bottom,
            revision: 0,
        }
    }

    /// Returns the detailed key, if any.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns `true` while the detail overlay should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the edge the overlay slides along.
    #[must_use]
    pub fn slide_edge(&self) -> SlideEdge {
        self.edge
    }

    /// Returns the current revision counter.
    ///
    /// The counter is local to this instance and bumps only when the detailed
    /// key actually changes. Re-showing the same key or dismissing an already
    /// hidden overlay leaves it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears the detailed key (back navigation).
    pub fn dismiss(&mut self) -> OverlayTransition {
        if self.current.take().is_none() {
            return OverlayTransition::Unchanged;
        }
        self.bump_revision();
        tracing::debug!(revision = self.revision, "detail overlay dismissed");
        OverlayTransition::SlideOut
    }

    /// Takes the detailed key out, hiding the overlay.
    pub fn take(&mut self) -> Option<T> {
        let taken = self.current.take();
        if taken.is_some() {
            self.bump_revision();
        }
        taken
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> DetailSelection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is the detailed key.
    #[must_use]
    pub fn is_current(&self, key: &T) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Makes `key` the detailed key (a tap on its card).
    pub fn show(&mut self, key: T) -> OverlayTransition {
        let transition = match &self.current {
            Some(existing) if *existing == key => return OverlayTransition::Unchanged,
            Some(_) => OverlayTransition::Swap,
            None => OverlayTransition::SlideIn,
        };
        self.current = Some(key);
        self.bump_revision();
        tracing::debug!(revision = self.revision, ?transition, "detail overlay shown");
        transition
    }

    /// Applies an optional key: `Some` shows it, `None` dismisses.
    pub fn set(&mut self, key: Option<T>) -> OverlayTransition {
        match key {
            Some(key) => self.show(key),
            None => self.dismiss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailSelection, OverlayTransition};

    #[test]
    fn toggles_visibility_only_for_slides() {
        assert!(OverlayTransition::SlideIn.toggles_visibility());
        assert!(OverlayTransition::SlideOut.toggles_visibility());
        assert!(!OverlayTransition::Swap.toggles_visibility());
        assert!(!OverlayTransition::Unchanged.toggles_visibility());
    }

    #[test]
    fn take_hides_and_returns_key() {
        let mut sel = DetailSelection::new();
        sel.show(7_u32);
        assert_eq!(sel.take(), Some(7));
        assert!(!sel.is_visible());
        assert_eq!(sel.revision(), 2);
        assert_eq!(sel.take(), None);
        assert_eq!(sel.revision(), 2);
    }
}
