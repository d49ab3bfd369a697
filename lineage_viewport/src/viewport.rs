// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::ClampMode;
use crate::state::TransformState;

/// Pan/zoom view over a tree canvas.
///
/// `TreeViewport` tracks the view rectangle in device space, the size of the
/// content (the laid-out tree canvas), and a uniform scale plus translation.
/// At rest the content is centered in the view. Scaling happens about the
/// content center and the translation is applied in view space afterwards:
///
/// `view = view_center + pan + scale * (world - content_center)`
///
/// Nothing is bounded by default: the scale may reach zero or go negative and
/// the pan is unlimited. Use [`TreeViewport::set_zoom_limits`] and
/// [`TreeViewport::set_clamp_mode`] to opt in to bounds.
#[derive(Clone, Debug)]
pub struct TreeViewport {
    view_rect: Rect,
    content_size: Size,
    zoom: f64,
    pan: Vec2,
    zoom_limits: Option<(f64, f64)>,
    clamp_mode: ClampMode,
    world_to_view: Affine,
    view_to_world: Option<Affine>,
}

impl TreeViewport {
    /// Creates a viewport covering `view_rect` with an identity transform.
    ///
    /// The content size starts at zero; set it with
    /// [`TreeViewport::set_content_size`] after each layout pass.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            content_size: Size::ZERO,
            zoom: 1.0,
            pan: Vec2::ZERO,
            zoom_limits: None,
            clamp_mode: ClampMode::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Some(Affine::IDENTITY),
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates.
    ///
    /// The content stays centered in the new rect; scale and pan are kept.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the content size in world units.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the content bounds in world coordinates, anchored at the origin.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.content_size)
    }

    /// Sets the content size, typically the canvas of a fresh layout pass.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size == size {
            return;
        }
        self.content_size = size;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current translation in view coordinates.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the zoom limits, if any are set.
    #[must_use]
    pub fn zoom_limits(&self) -> Option<(f64, f64)> {
        self.zoom_limits
    }

    /// Sets or removes the zoom limits.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, limits: Option<(f64, f64)>) {
        self.zoom_limits = limits.map(|(a, b)| if a <= b { (a, b) } else { (b, a) });
        self.set_zoom(self.zoom);
    }

    /// Sets the clamp mode for panning relative to the content bounds.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the zoom factor, clamping it into the zoom limits if any are set.
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = self.limit_zoom(zoom);
        if self.zoom == zoom {
            return;
        }
        self.zoom = zoom;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Sets the translation in view coordinates.
    pub fn set_pan(&mut self, pan: Vec2) {
        if self.pan == pan {
            return;
        }
        self.pan = pan;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Merges one gesture update into the transform.
    ///
    /// The scale is multiplied by `zoom_change` and the translation grows by
    /// `pan_change`. This is called once per gesture update event.
    pub fn apply_gesture(&mut self, zoom_change: f64, pan_change: Vec2) {
        self.zoom = self.limit_zoom(self.zoom * zoom_change);
        self.pan += pan_change;
        self.rebuild_transforms();
        self.clamp_to_bounds();
        tracing::trace!(
            zoom = self.zoom,
            pan_x = self.pan.x,
            pan_y = self.pan.y,
            "viewport gesture"
        );
    }

    /// Pans the view by a delta in view/device space.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.set_pan(self.pan + delta);
    }

    /// Zooms around a given anchor point in view/device coordinates.
    ///
    /// The world point under the anchor stays under the anchor. Factors that
    /// are not positive are ignored, as is any call while the view has no
    /// inverse.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let Some(anchor_world) = self.view_to_world_point(anchor_view) else {
            return;
        };
        let new_zoom = self.limit_zoom(self.zoom * factor);
        if new_zoom == self.zoom {
            return;
        }
        self.zoom = new_zoom;
        self.rebuild_transforms();
        let moved = self.world_to_view_point(anchor_world);
        self.pan_by_view(anchor_view - moved);
        self.clamp_to_bounds();
    }

    /// Scales the content to fit the view, preserving aspect ratio, and
    /// clears the translation.
    ///
    /// Does nothing while either the content or the view is empty.
    pub fn fit_content(&mut self) {
        let content = self.content_size;
        let view = self.view_rect.size();
        if content.width <= 0.0 || content.height <= 0.0 {
            return;
        }
        if view.width <= 0.0 || view.height <= 0.0 {
            return;
        }
        let target = (view.width / content.width).min(view.height / content.height);
        self.zoom = self.limit_zoom(target);
        self.pan = Vec2::ZERO;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Moves the view so that a world-space point sits at the view center.
    pub fn center_on(&mut self, world_pt: Point) {
        let delta = self.view_rect.center() - self.world_to_view_point(world_pt);
        self.pan_by_view(delta);
    }

    /// Returns to scale `1` with no translation.
    pub fn reset(&mut self) {
        self.restore(TransformState::IDENTITY);
    }

    /// Returns the persistable transform state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        TransformState {
            scale: self.zoom,
            translate_x: self.pan.x,
            translate_y: self.pan.y,
        }
    }

    /// Restores a previously saved transform state.
    ///
    /// Zoom limits and clamping still apply when configured.
    pub fn restore(&mut self, state: TransformState) {
        self.zoom = self.limit_zoom(state.scale);
        self.pan = state.translation();
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the world to view transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_view
    }

    /// Returns the visible world-space rectangle, if the view is invertible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Option<Rect> {
        self.view_to_world_rect(self.view_rect)
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view/device-space point into world coordinates.
    ///
    /// Returns `None` while the scale is zero or not finite.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Option<Point> {
        self.view_to_world.map(|inv| inv * pt)
    }

    /// Converts a world-space rectangle into view/device coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        self.world_to_view.transform_rect_bbox(rect)
    }

    /// Converts a view/device-space rectangle into world coordinates.
    ///
    /// Returns `None` while the scale is zero or not finite.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Option<Rect> {
        self.view_to_world.map(|inv| inv.transform_rect_bbox(rect))
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TreeViewportDebugInfo {
        TreeViewportDebugInfo {
            view_rect: self.view_rect,
            content_size: self.content_size,
            visible_world_rect: self.visible_world_rect(),
            zoom: self.zoom,
            pan: self.pan,
            zoom_limits: self.zoom_limits,
            clamp_mode: self.clamp_mode,
        }
    }

    fn limit_zoom(&self, zoom: f64) -> f64 {
        match self.zoom_limits {
            Some((min, max)) => zoom.clamp(min, max),
            None => zoom,
        }
    }

    fn rebuild_transforms(&mut self) {
        let content_center = Rect::from_origin_size(Point::ORIGIN, self.content_size)
            .center()
            .to_vec2();
        let view_center = self.view_rect.center().to_vec2();
        // Center the content, scale about its center, then apply the pan.
        self.world_to_view = Affine::translate(view_center + self.pan)
            * Affine::scale(self.zoom)
            * Affine::translate(-content_center);
        self.view_to_world = (self.zoom.is_finite() && self.zoom != 0.0)
            .then(|| self.world_to_view.inverse());
    }

    fn clamp_to_bounds(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let bounds = self.content_bounds();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }
        let Some(visible) = self.visible_world_rect() else {
            return;
        };
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;
        if visible.max_x() < bounds.min_x() {
            dx = bounds.min_x() - visible.max_x();
        } else if visible.min_x() > bounds.max_x() {
            dx = bounds.max_x() - visible.min_x();
        }
        if visible.max_y() < bounds.min_y() {
            dy = bounds.min_y() - visible.max_y();
        } else if visible.min_y() > bounds.max_y() {
            dy = bounds.max_y() - visible.min_y();
        }

        if dx != 0.0 || dy != 0.0 {
            // Moving the visible rect by +d in world space moves the content
            // by -d * zoom in view space.
            self.pan += Vec2::new(-dx * self.zoom, -dy * self.zoom);
            self.rebuild_transforms();
        }
    }
}

/// Debug snapshot of a [`TreeViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct TreeViewportDebugInfo {
    /// Current view rectangle in device coordinates.
    pub view_rect: Rect,
    /// Content size in world units.
    pub content_size: Size,
    /// World-space rectangle currently visible, if the view is invertible.
    pub visible_world_rect: Option<Rect>,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Current translation in view coordinates.
    pub pan: Vec2,
    /// Zoom limits, if set.
    pub zoom_limits: Option<(f64, f64)>,
    /// Clamp mode for panning relative to the content.
    pub clamp_mode: ClampMode,
}
