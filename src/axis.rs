// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::IndexError;

/// An axis in the plane.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Both axes, in index order.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The numeric index of this axis: 0 for x, 1 for y.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = IndexError;

    /// Convert a numeric axis index (0 for x, 1 for y).
    fn try_from(index: usize) -> Result<Self, IndexError> {
        match index {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            _ => Err(IndexError::new(index, 2)),
        }
    }
}
