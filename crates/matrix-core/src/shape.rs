// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix shape descriptors and compatibility rules.

use std::fmt;

use crate::error::or_fail;
use crate::MatrixError;

/// The `(rows, cols)` extent of a [`crate::Matrix`].
///
/// Shapes are plain values; every operation that changes a matrix's extent
/// produces a new shape rather than mutating one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

/// How the two operands of an addition line up.
///
/// The variants mirror the order in which the cases are tried: an exact
/// match wins over either single-row broadcast, and a single-row right
/// operand wins over a single-row left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Broadcast {
    /// Same shape on both sides.
    Exact,
    /// The right operand is one row, repeated over every row of the left.
    RowRhs,
    /// The left operand is one row, repeated over every row of the right.
    RowLhs,
}

impl Shape {
    /// Creates a shape with the given row and column counts.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Shape;
    /// let s = Shape::new(2, 3);
    /// assert_eq!(s.num_elements(), 6);
    /// ```
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The empty `0x0` shape.
    pub const fn empty() -> Self {
        Self { rows: 0, cols: 0 }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of elements, or an error if it overflows `usize`.
    pub fn try_num_elements(&self) -> Result<usize, MatrixError> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(MatrixError::SizeOverflow {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Returns the total number of elements.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn num_elements(&self) -> usize {
        or_fail(self.try_num_elements())
    }

    /// Returns the shape with rows and columns swapped.
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Row-major linear offset of `(row, col)`, or `None` if out of bounds.
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Returns `true` if `self` (`[M, K]`) can be multiplied by `other` (`[K, N]`).
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        self.cols == other.rows
    }

    /// Returns the shape of `self * other`, if the product is defined.
    pub fn matmul_output(&self, other: &Shape) -> Option<Shape> {
        self.is_matmul_compatible(other)
            .then(|| Shape::new(self.rows, other.cols))
    }

    /// Classifies how `self + other` broadcasts, or `None` if it cannot.
    ///
    /// Only single-row operands broadcast, and only across rows.
    pub fn add_broadcast(&self, other: &Shape) -> Option<Broadcast> {
        if self == other {
            Some(Broadcast::Exact)
        } else if other.rows == 1 && other.cols == self.cols {
            Some(Broadcast::RowRhs)
        } else if self.rows == 1 && self.cols == other.cols {
            Some(Broadcast::RowLhs)
        } else {
            None
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

/// Convenience: `Shape::from((2, 3))`.
impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}
