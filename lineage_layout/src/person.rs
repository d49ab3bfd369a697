// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::ahnentafel::Ahnentafel;
use crate::error::LayoutError;

/// A person in an ancestry tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    ahnentafel: Ahnentafel,
}

impl Person {
    /// Creates a person at the given position in the tree.
    #[must_use]
    pub fn new(name: impl Into<String>, ahnentafel: Ahnentafel) -> Self {
        Self {
            name: name.into(),
            ahnentafel,
        }
    }

    /// Creates a person from a raw ahnentafel number.
    ///
    /// Fails with [`LayoutError::InvalidAhnentafel`] for non-positive numbers
    /// and numbers that do not fit in `u32`.
    pub fn try_new(name: impl Into<String>, ahnentafel: i64) -> Result<Self, LayoutError> {
        Ok(Self::new(name, Ahnentafel::try_from(ahnentafel)?))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's ahnentafel number.
    #[must_use]
    pub fn ahnentafel(&self) -> Ahnentafel {
        self.ahnentafel
    }

    /// Returns the person's generation, counted from the subject at 1.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.ahnentafel.depth()
    }
}
