// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Vec2};
use lineage_layout::{
    Ahnentafel, FamilySource, LayoutError, Person, PxSize, TreeLayout, TreeLayoutConfig,
    layout_uniform,
};
use lineage_selection::{DetailSelection, OverlayTransition};
use lineage_viewport::{TransformState, TreeViewport};

use crate::gesture::{GestureDelta, PointerId, PointerRelease, TransformGesture};

/// Configuration for a [`TreeShell`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellConfig {
    /// Size every person card is measured at.
    pub card_size: PxSize,
    /// Spacing and orientation of the tree layout.
    pub layout: TreeLayoutConfig,
    /// Distance a press may travel and still count as a tap, in view pixels.
    pub touch_slop: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            // A 40px caption column inside 4px padding, below a 24px icon.
            card_size: PxSize::new(48, 58),
            layout: TreeLayoutConfig::default(),
            touch_slop: TransformGesture::DEFAULT_TOUCH_SLOP,
        }
    }
}

/// What a pointer event did to the shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellEvent {
    /// Nothing visible changed.
    None,
    /// The transform changed by this delta.
    Transformed(GestureDelta),
    /// A tap landed; the overlay moved as described.
    Tapped {
        /// The person under the tap, if any.
        ahnentafel: Option<Ahnentafel>,
        /// The resulting overlay change.
        transition: OverlayTransition,
    },
}

/// A family tree on screen: layout, pan/zoom, gestures, and the detail overlay.
///
/// The shell owns its [`FamilySource`], the most recent [`TreeLayout`], a
/// [`TreeViewport`] sized to that layout, and a [`DetailSelection`] keyed by
/// ahnentafel number. All state changes go through `&mut self` from the host's
/// event loop.
#[derive(Debug)]
pub struct TreeShell<S> {
    source: S,
    config: ShellConfig,
    layout: TreeLayout,
    viewport: TreeViewport,
    detail: DetailSelection<Ahnentafel>,
    gesture: TransformGesture,
}

impl<S: FamilySource> TreeShell<S> {
    /// Creates a shell over `source`, laying it out for a view of `view_rect`.
    ///
    /// # Errors
    ///
    /// Returns the layout error if the source cannot be laid out.
    pub fn new(source: S, view_rect: Rect, config: ShellConfig) -> Result<Self, LayoutError> {
        let layout = layout_uniform(source.people(), config.card_size, &config.layout)?;
        let mut viewport = TreeViewport::new(view_rect);
        viewport.set_content_size(layout.size().to_size());
        Ok(Self {
            source,
            config,
            layout,
            viewport,
            detail: DetailSelection::new(),
            gesture: TransformGesture::new(config.touch_slop),
        })
    }

    /// Returns the data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Returns the most recent layout.
    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &TreeViewport {
        &self.viewport
    }

    /// Returns the viewport for configuring limits or clamping.
    pub fn viewport_mut(&mut self) -> &mut TreeViewport {
        &mut self.viewport
    }

    /// Replaces the data source and lays it out.
    ///
    /// On failure the previous source and layout stay in place. A detailed
    /// person missing from the new source is dismissed.
    ///
    /// # Errors
    ///
    /// Returns the layout error if the new source cannot be laid out.
    pub fn set_source(&mut self, source: S) -> Result<OverlayTransition, LayoutError> {
        let layout = layout_uniform(source.people(), self.config.card_size, &self.config.layout)?;
        self.source = source;
        self.install(layout);
        let stale = self
            .detail
            .current()
            .is_some_and(|&n| self.source.person(n).is_none());
        Ok(if stale {
            self.detail.dismiss()
        } else {
            OverlayTransition::Unchanged
        })
    }

    /// Changes the measured card size and lays the tree out again.
    ///
    /// # Errors
    ///
    /// Returns the layout error; the previous size stays in place.
    pub fn set_card_size(&mut self, size: PxSize) -> Result<(), LayoutError> {
        let layout = layout_uniform(self.source.people(), size, &self.config.layout)?;
        self.config.card_size = size;
        self.install(layout);
        Ok(())
    }

    /// Changes spacing or orientation and lays the tree out again.
    ///
    /// # Errors
    ///
    /// Returns the layout error; the previous configuration stays in place.
    pub fn set_layout_config(&mut self, config: TreeLayoutConfig) -> Result<(), LayoutError> {
        let layout = layout_uniform(self.source.people(), self.config.card_size, &config)?;
        self.config.layout = config;
        self.install(layout);
        Ok(())
    }

    /// Runs the layout pass again over the current source.
    ///
    /// # Errors
    ///
    /// Returns the layout error; the previous layout stays in place.
    pub fn relayout(&mut self) -> Result<&TreeLayout, LayoutError> {
        let layout = layout_uniform(
            self.source.people(),
            self.config.card_size,
            &self.config.layout,
        )?;
        self.install(layout);
        Ok(&self.layout)
    }

    /// Sets the view rectangle the tree is centered in.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.viewport.set_view_rect(rect);
    }

    /// Merges a pre-computed gesture update into the transform.
    pub fn on_gesture(&mut self, zoom_change: f64, pan_change: Vec2) {
        self.viewport.apply_gesture(zoom_change, pan_change);
    }

    /// Reports a press.
    ///
    /// Returns `false` if the press was rejected: the pointer is already down,
    /// or two pointers are already tracked.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) -> bool {
        self.gesture.pointer_down(id, pos)
    }

    /// Reports a move, applying any resulting transform change.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> ShellEvent {
        match self.gesture.pointer_move(id, pos) {
            Some(delta) => {
                self.viewport.apply_gesture(delta.zoom_change, delta.pan_change);
                ShellEvent::Transformed(delta)
            }
            None => ShellEvent::None,
        }
    }

    /// Reports a release; a tap selects the card under it.
    pub fn pointer_up(&mut self, id: PointerId) -> ShellEvent {
        match self.gesture.pointer_up(id) {
            PointerRelease::Tap(pos) => {
                let ahnentafel = self.card_at(pos);
                let transition = match ahnentafel {
                    Some(n) => self.detail.show(n),
                    None => OverlayTransition::Unchanged,
                };
                ShellEvent::Tapped {
                    ahnentafel,
                    transition,
                }
            }
            PointerRelease::Continue | PointerRelease::End | PointerRelease::Ignored => {
                ShellEvent::None
            }
        }
    }

    /// Drops any in-progress gesture.
    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel();
    }

    /// Returns the card under a view-space point, if any.
    ///
    /// Returns `None` while the transform has no inverse.
    #[must_use]
    pub fn card_at(&self, view_pt: Point) -> Option<Ahnentafel> {
        let canvas_pt = self.viewport.view_to_world_point(view_pt)?;
        self.layout.node_at(canvas_pt).map(|n| n.ahnentafel)
    }

    /// Selects the card under a view-space point, as a tap does.
    pub fn tap_at(&mut self, view_pt: Point) -> OverlayTransition {
        match self.card_at(view_pt) {
            Some(n) => self.detail.show(n),
            None => OverlayTransition::Unchanged,
        }
    }

    /// Shows the details of the person with this number.
    ///
    /// Numbers not present in the source leave the selection unchanged.
    pub fn select(&mut self, ahnentafel: Ahnentafel) -> OverlayTransition {
        if self.source.person(ahnentafel).is_none() {
            tracing::debug!(%ahnentafel, "ignoring selection of unknown person");
            return OverlayTransition::Unchanged;
        }
        self.detail.show(ahnentafel)
    }

    /// Back navigation: hides the detail overlay.
    pub fn back(&mut self) -> OverlayTransition {
        self.detail.dismiss()
    }

    /// Returns the person whose details are shown.
    #[must_use]
    pub fn detailed_person(&self) -> Option<&Person> {
        self.detail.current().and_then(|&n| self.source.person(n))
    }

    /// Returns `true` while the detail overlay is shown.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.detail.is_visible()
    }

    /// Returns the detail selection.
    pub fn detail(&self) -> &DetailSelection<Ahnentafel> {
        &self.detail
    }

    /// Returns the overlay heading for the detailed person.
    #[must_use]
    pub fn detail_title(&self) -> Option<String> {
        self.detailed_person()
            .map(|p| format!("Details for {}", p.name()))
    }

    /// Iterates people with their card rectangles in view coordinates.
    pub fn cards(&self) -> impl Iterator<Item = (&Person, Rect)> + '_ {
        let people = self.source.people();
        self.layout.iter().filter_map(move |node| {
            let person = people.get(node.index)?;
            Some((person, self.viewport.world_to_view_rect(node.rect())))
        })
    }

    /// Returns the persistable transform state.
    #[must_use]
    pub fn transform_state(&self) -> TransformState {
        self.viewport.state()
    }

    /// Restores a saved transform state.
    pub fn restore_transform(&mut self, state: TransformState) {
        self.viewport.restore(state);
    }

    fn install(&mut self, layout: TreeLayout) {
        self.viewport.set_content_size(layout.size().to_size());
        self.layout = layout;
    }
}
