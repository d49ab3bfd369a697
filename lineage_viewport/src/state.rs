// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// The persistable part of a [`crate::TreeViewport`]: scale and translation.
///
/// Hosts save this across process relaunch and hand it back to
/// [`crate::TreeViewport::restore`]. With the `serde` feature it derives
/// `Serialize` and `Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal translation in view pixels.
    pub translate_x: f64,
    /// Vertical translation in view pixels.
    pub translate_y: f64,
}

impl TransformState {
    /// The untransformed state: scale `1`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::TransformState;

    #[test]
    fn serde_uses_field_names() {
        let state = TransformState {
            scale: 2.5,
            translate_x: -10.0,
            translate_y: 4.0,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"scale":2.5,"translate_x":-10.0,"translate_y":4.0}"#);
        let back: TransformState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
