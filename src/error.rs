// Copyright 2026 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An index outside the valid range of a small fixed-size collection.
///
/// This is returned when addressing a control point of a cubic Bézier
/// (valid indices are 0 to 3) or an axis (0 or 1) by number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
    index: usize,
    bound: usize,
}

impl IndexError {
    pub(crate) const fn new(index: usize, bound: usize) -> Self {
        IndexError { index, bound }
    }

    /// The offending index.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// The exclusive upper bound; every valid index is less than this.
    #[inline]
    pub fn bound(self) -> usize {
        self.bound
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range, expected a value in 0..{}",
            self.index, self.bound
        )
    }
}

impl core::error::Error for IndexError {}

#[cfg(test)]
mod tests {
    use super::IndexError;

    #[test]
    fn message() {
        let err = IndexError::new(4, 4);
        assert_eq!(err.to_string(), "index 4 out of range, expected a value in 0..4");
    }
}
