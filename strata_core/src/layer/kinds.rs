// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability selection flags.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// A set of layer capabilities, for selecting which stacks a composite
/// operation touches.
///
/// The three flags are independent bits combinable with `|`:
///
/// ```
/// use strata_core::layer::LayerKinds;
///
/// let kinds = LayerKinds::INPUT | LayerKinds::DRAW;
/// assert!(kinds.contains(LayerKinds::INPUT));
/// assert!(!kinds.contains(LayerKinds::UPDATE));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerKinds(u8);

impl LayerKinds {
    /// No capabilities.
    pub const NONE: Self = Self(0);
    /// The input-receiving capability.
    pub const INPUT: Self = Self(1 << 0);
    /// The drawable capability.
    pub const DRAW: Self = Self(1 << 1);
    /// The updateable capability.
    pub const UPDATE: Self = Self(1 << 2);
    /// All three capabilities.
    pub const ALL: Self = Self(Self::INPUT.0 | Self::DRAW.0 | Self::UPDATE.0);

    /// Returns whether every capability in `other` is also in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no capability is selected.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayerKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayerKinds {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for LayerKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "LayerKinds(none)");
        }
        write!(f, "LayerKinds(")?;
        let mut sep = "";
        for (flag, label) in [
            (Self::INPUT, "input"),
            (Self::DRAW, "draw"),
            (Self::UPDATE, "update"),
        ] {
            if self.contains(flag) {
                write!(f, "{sep}{label}")?;
                sep = "|";
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn flags_combine_with_or() {
        let kinds = LayerKinds::INPUT | LayerKinds::UPDATE;
        assert!(kinds.contains(LayerKinds::INPUT));
        assert!(kinds.contains(LayerKinds::UPDATE));
        assert!(!kinds.contains(LayerKinds::DRAW));
    }

    #[test]
    fn all_contains_each_flag() {
        assert!(LayerKinds::ALL.contains(LayerKinds::INPUT));
        assert!(LayerKinds::ALL.contains(LayerKinds::DRAW));
        assert!(LayerKinds::ALL.contains(LayerKinds::UPDATE));
    }

    #[test]
    fn none_is_empty() {
        assert!(LayerKinds::NONE.is_empty());
        assert!(!LayerKinds::INPUT.is_empty());
        assert_eq!(LayerKinds::default(), LayerKinds::NONE);
    }

    #[test]
    fn or_assign_accumulates() {
        let mut kinds = LayerKinds::NONE;
        kinds |= LayerKinds::DRAW;
        kinds |= LayerKinds::INPUT;
        assert_eq!(kinds, LayerKinds::INPUT | LayerKinds::DRAW);
    }

    #[test]
    fn debug_lists_flags_in_fixed_order() {
        assert_eq!(
            format!("{:?}", LayerKinds::UPDATE | LayerKinds::INPUT),
            "LayerKinds(input|update)"
        );
        assert_eq!(format!("{:?}", LayerKinds::NONE), "LayerKinds(none)");
    }
}
