// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform gesture recognizer: turn raw pointer positions into zoom/pan deltas and taps.
//!
//! ## Usage
//!
//! 1) Report each press with [`TransformGesture::pointer_down`].
//! 2) On each move, call [`TransformGesture::pointer_move`]; once the gesture
//!    has started it returns a [`GestureDelta`] to merge into the viewport.
//! 3) Report each release with [`TransformGesture::pointer_up`]; a single
//!    press that never travelled past the touch slop comes back as
//!    [`PointerRelease::Tap`].
//!
//! One pointer pans. Two pointers pan by the movement of their centroid and
//! zoom by the ratio of their distances. Further pointers are ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lineage_shell::gesture::{PointerRelease, TransformGesture};
//!
//! let mut gesture = TransformGesture::new(8.0);
//!
//! // A short press is a tap.
//! gesture.pointer_down(1, Point::new(10.0, 10.0));
//! assert_eq!(gesture.pointer_move(1, Point::new(12.0, 11.0)), None);
//! assert_eq!(gesture.pointer_up(1), PointerRelease::Tap(Point::new(10.0, 10.0)));
//!
//! // Spreading two fingers apart zooms in.
//! gesture.pointer_down(1, Point::new(100.0, 100.0));
//! gesture.pointer_down(2, Point::new(200.0, 100.0));
//! let delta = gesture.pointer_move(2, Point::new(300.0, 100.0)).unwrap();
//! assert_eq!(delta.zoom_change, 2.0);
//! assert_eq!(delta.pan_change, Vec2::new(50.0, 0.0));
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Host-assigned identifier of a pointer (a finger, a mouse button, a pen).
pub type PointerId = u64;

/// One incremental update to merge into the pan/zoom transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureDelta {
    /// Multiplicative zoom change; `1.0` for a pure pan.
    pub zoom_change: f64,
    /// Additive translation in view pixels.
    pub pan_change: Vec2,
    /// Centroid of the active pointers after the move, in view pixels.
    pub centroid: Point,
}

/// What a pointer release meant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerRelease {
    /// A lone press that stayed within the touch slop, at its press position.
    Tap(Point),
    /// Other pointers are still down; the gesture continues.
    Continue,
    /// The gesture is over.
    End,
    /// The pointer was not being tracked.
    Ignored,
}

#[derive(Clone, Copy, Debug)]
struct Tracked {
    id: PointerId,
    start: Point,
    last: Point,
}

/// Tracks up to two pointers and derives transform deltas from their motion.
#[derive(Clone, Debug)]
pub struct TransformGesture {
    pointers: SmallVec<[Tracked; 2]>,
    touch_slop: f64,
    /// Set once a pan passes the slop or a second pointer lands.
    started: bool,
}

impl Default for TransformGesture {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOUCH_SLOP)
    }
}

impl TransformGesture {
    /// Default distance a press may travel and still count as a tap.
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

    /// Creates an idle recognizer with the given touch slop in view pixels.
    #[must_use]
    pub fn new(touch_slop: f64) -> Self {
        Self {
            pointers: SmallVec::new(),
            touch_slop: touch_slop.max(0.0),
            started: false,
        }
    }

    /// Returns the touch slop.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Returns `true` while any pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Returns `true` once the current press has turned into a pan or pinch.
    #[must_use]
    pub fn is_transforming(&self) -> bool {
        self.started
    }

    /// Starts tracking a pointer.
    ///
    /// Returns `false` if the pointer is already tracked or two pointers are
    /// already down.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) -> bool {
        if self.pointers.len() >= 2 || self.index_of(id).is_some() {
            return false;
        }
        self.pointers.push(Tracked {
            id,
            start: pos,
            last: pos,
        });
        if self.pointers.len() == 2 {
            // A second finger always means a transform, never a tap.
            self.started = true;
        }
        true
    }

    /// Moves a tracked pointer, returning the transform delta if the gesture
    /// has started.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> Option<GestureDelta> {
        let idx = self.index_of(id)?;

        if self.pointers.len() == 1 {
            let tracked = &mut self.pointers[idx];
            if !self.started {
                if (pos - tracked.start).hypot() <= self.touch_slop {
                    return None;
                }
                self.started = true;
            }
            let pan_change = pos - tracked.last;
            tracked.last = pos;
            return Some(GestureDelta {
                zoom_change: 1.0,
                pan_change,
                centroid: pos,
            });
        }

        let (old_centroid, old_span) = self.centroid_and_span();
        self.pointers[idx].last = pos;
        let (centroid, span) = self.centroid_and_span();
        let zoom_change = if old_span > 0.0 { span / old_span } else { 1.0 };
        Some(GestureDelta {
            zoom_change,
            pan_change: centroid - old_centroid,
            centroid,
        })
    }

    /// Stops tracking a pointer.
    pub fn pointer_up(&mut self, id: PointerId) -> PointerRelease {
        let Some(idx) = self.index_of(id) else {
            return PointerRelease::Ignored;
        };
        let released = self.pointers.remove(idx);
        if !self.pointers.is_empty() {
            return PointerRelease::Continue;
        }
        let was_tap = !self.started;
        self.started = false;
        if was_tap {
            PointerRelease::Tap(released.start)
        } else {
            PointerRelease::End
        }
    }

    /// Drops all pointers without producing a tap.
    pub fn cancel(&mut self) {
        self.pointers.clear();
        self.started = false;
    }

    fn index_of(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    fn centroid_and_span(&self) -> (Point, f64) {
        match self.pointers.as_slice() {
            [a, b] => (a.last.midpoint(b.last), (b.last - a.last).hypot()),
            [a] => (a.last, 0.0),
            _ => (Point::ORIGIN, 0.0),
        }
    }
}
