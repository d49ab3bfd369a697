// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ahnentafel numbers: ancestor identity encoded in a positive integer.

use core::fmt;
use core::num::NonZeroU32;

use crate::error::LayoutError;

/// An ahnentafel number.
///
/// The subject of the tree is `1`. For any person numbered `n`, the father is
/// `2n` and the mother is `2n + 1`. Reading the binary digits of `n` after the
/// leading `1` gives the path from the subject to that ancestor, with `0`
/// stepping to the father and `1` stepping to the mother.
///
/// The value is never zero, so non-positive indices are unrepresentable once
/// constructed. Raw integers are checked by [`Ahnentafel::new`] and the
/// `TryFrom` impls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ahnentafel(NonZeroU32);

impl Ahnentafel {
    /// The subject of the tree.
    pub const ROOT: Self = Self(NonZeroU32::MIN);

    /// Creates an ahnentafel number, returning `None` for zero.
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the raw number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the generation of this person, counted from the subject.
    ///
    /// This is the number of binary digits in the number: the subject is at
    /// depth 1, parents at depth 2, grandparents at depth 3, and so on.
    #[must_use]
    pub const fn depth(self) -> u32 {
        u32::BITS - self.0.leading_zeros()
    }

    /// Returns `true` for the subject of the tree.
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0.get() == 1
    }

    /// Returns the father's number, or `None` if it does not fit in `u32`.
    #[must_use]
    pub const fn father(self) -> Option<Self> {
        match self.0.get().checked_mul(2) {
            Some(n) => Self::new(n),
            None => None,
        }
    }

    /// Returns the mother's number, or `None` if it does not fit in `u32`.
    #[must_use]
    pub const fn mother(self) -> Option<Self> {
        match self.0.get().checked_mul(2) {
            Some(n) => match n.checked_add(1) {
                Some(n) => Self::new(n),
                None => None,
            },
            None => None,
        }
    }

    /// Returns the number of the person whose parent this is.
    ///
    /// The subject has no child in the tree.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        Self::new(self.0.get() / 2)
    }

    /// Returns `true` if this person is reached through a father link
    /// (an even number).
    #[must_use]
    pub const fn is_paternal(self) -> bool {
        !self.is_root() && self.0.get() % 2 == 0
    }

    /// Iterates the path from the subject to this person.
    ///
    /// The root yields nothing. Number `6` (`0b110`) yields
    /// `[Branch::Mother, Branch::Father]`: the subject's mother, then her
    /// father.
    #[must_use]
    pub fn branches(self) -> Branches {
        Branches {
            n: self.0.get(),
            remaining: self.depth() - 1,
        }
    }
}

impl fmt::Display for Ahnentafel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Ahnentafel> for u32 {
    fn from(value: Ahnentafel) -> Self {
        value.get()
    }
}

impl TryFrom<u32> for Ahnentafel {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(LayoutError::InvalidAhnentafel(i64::from(value)))
    }
}

impl TryFrom<i64> for Ahnentafel {
    type Error = LayoutError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(LayoutError::InvalidAhnentafel(value))
    }
}

/// One step on the path from the subject towards an ancestor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The `0` bit: step to the father, drawn on the left.
    Father,
    /// The `1` bit: step to the mother, drawn on the right.
    Mother,
}

/// Iterator over the [`Branch`] steps of an [`Ahnentafel`] number.
///
/// Created by [`Ahnentafel::branches`].
#[derive(Clone, Debug)]
pub struct Branches {
    n: u32,
    remaining: u32,
}

impl Iterator for Branches {
    type Item = Branch;

    fn next(&mut self) -> Option<Branch> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(if (self.n >> self.remaining) & 1 == 1 {
            Branch::Mother
        } else {
            Branch::Father
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Branches {}
