// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for panning relative to the content bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the content may be panned anywhere.
    #[default]
    None,
    /// Pull the view back whenever the content would leave it entirely.
    ///
    /// At least some portion of the content stays visible.
    KeepSomeVisible,
}
