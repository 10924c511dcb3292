// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core matrix type: storage, construction, and element access.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::or_fail;
use crate::{ops, Element, MatrixError, Shape};

/// An owned, row-major dense matrix.
///
/// Element `(i, j)` lives at linear index `i * cols + j`, and the buffer
/// always holds exactly `rows * cols` elements. `Clone` is a deep copy;
/// [`take`](Matrix::take) moves the storage out and leaves an empty `0x0`
/// matrix behind.
///
/// # Examples
/// ```
/// use matrix_core::Matrix;
/// let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
/// let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]);
/// assert_eq!(&a * &b, Matrix::from_rows(&[vec![19, 22], vec![43, 50]]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Wraps a row-major buffer, checking that it holds `rows * cols` elements.
    pub fn try_from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let expected = Shape::new(rows, cols).try_num_elements()?;
        if data.len() != expected {
            return Err(MatrixError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Wraps a row-major buffer verbatim.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    #[track_caller]
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Self {
        or_fail(Self::try_from_vec(data, rows, cols))
    }

    /// Builds a matrix from `data` without checking its length.
    ///
    /// Only for results computed inside this crate, where the length is
    /// known to match by construction.
    pub(crate) fn from_parts(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(Some(data.len()), rows.checked_mul(cols));
        Self { rows, cols, data }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Total number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to element `(row, col)`, or an error if out of bounds.
    pub fn try_get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to element `(row, col)`, or an error if out of bounds.
    pub fn try_get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Returns a reference to element `(row, col)`.
    ///
    /// # Panics
    /// Panics unless `row < rows() && col < cols()`.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> &T {
        or_fail(self.try_get(row, col))
    }

    /// Returns a mutable reference to element `(row, col)`.
    ///
    /// # Panics
    /// Panics unless `row < rows() && col < cols()`.
    #[track_caller]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        or_fail(self.try_get_mut(row, col))
    }

    /// Returns row `row` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        if row >= self.rows {
            MatrixError::IndexOutOfBounds {
                row,
                col: 0,
                shape: self.shape(),
            }
            .fail();
        }
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the rows as slices.
    ///
    /// A matrix with zero columns still yields `rows()` empty slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Returns the row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Moves the value out, leaving `self` as the empty `0x0` matrix.
    ///
    /// ```
    /// use matrix_core::Matrix;
    /// let mut a = Matrix::new(2, 2, 1.0);
    /// let b = a.take();
    /// assert_eq!(b.rows(), 2);
    /// assert!(a.is_empty());
    /// assert_eq!((a.rows(), a.cols()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        self.shape()
            .offset(row, col)
            .ok_or(MatrixError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            })
    }
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x cols` matrix with every element set to `initial`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn new(rows: usize, cols: usize, initial: T) -> Self {
        let len = Shape::new(rows, cols).num_elements();
        Self {
            rows,
            cols,
            data: vec![initial; len],
        }
    }

    /// Creates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, T::zero())
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Builds a matrix from nested rows, checking that they are rectangular.
    ///
    /// The column count is taken from the first row (0 if there are no rows).
    pub fn try_from_rows<R: AsRef<[T]>>(nested: &[R]) -> Result<Self, MatrixError> {
        let rows = nested.len();
        let cols = nested.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(Shape::new(rows, cols).try_num_elements()?);
        for (i, row) in nested.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Panics
    /// Panics if any row's length differs from the first row's.
    #[track_caller]
    pub fn from_rows<R: AsRef<[T]>>(nested: &[R]) -> Self {
        or_fail(Self::try_from_rows(nested))
    }

    /// Returns the transpose as a new `(cols, rows)` matrix.
    pub fn transpose(&self) -> Self {
        ops::transpose(self)
    }

    /// Replaces `self` with its transpose.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        *self = self.transpose();
        self
    }

    /// Applies `f` to every element, producing a new matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self::from_parts(
            self.data.iter().map(|&x| f(x)).collect(),
            self.rows,
            self.cols,
        )
    }

    /// Applies `f` to every element in place.
    pub fn map_in_place<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(T) -> T,
    {
        self.data.iter_mut().for_each(|x| *x = f(*x));
        self
    }

    /// Returns `(i, i)` for every `i < min(rows, cols)`.
    pub fn diagonal(&self) -> Vec<T> {
        let n = self.rows.min(self.cols);
        (0..n).map(|i| self.data[i * self.cols + i]).collect()
    }

    /// Addition with single-row broadcasting.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        ops::add(self, rhs)
    }

    /// Elementwise subtraction; shapes must match exactly.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        ops::sub(self, rhs)
    }

    /// Elementwise (Hadamard) product; shapes must match exactly.
    pub fn try_hadamard(&self, rhs: &Self) -> Result<Self, MatrixError> {
        ops::hadamard(self, rhs)
    }

    /// Matrix product `self * rhs`.
    pub fn try_matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        ops::matmul(self, rhs)
    }

    /// Matrix-vector product; `vector.len()` must equal `cols()`.
    pub fn try_matvec(&self, vector: &[T]) -> Result<Vec<T>, MatrixError> {
        ops::matvec(self, vector)
    }

    /// Elementwise (Hadamard) product.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    #[track_caller]
    pub fn hadamard(&self, rhs: &Self) -> Self {
        or_fail(self.try_hadamard(rhs))
    }

    /// In-place Hadamard product.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    #[track_caller]
    pub fn hadamard_in_place(&mut self, rhs: &Self) -> &mut Self {
        or_fail(ops::hadamard_assign(self, rhs));
        self
    }

    /// Matrix-vector product.
    ///
    /// # Panics
    /// Panics if `vector.len() != cols()`.
    #[track_caller]
    pub fn matvec(&self, vector: &[T]) -> Vec<T> {
        or_fail(self.try_matvec(vector))
    }
}

impl<T> Default for Matrix<T> {
    /// The empty `0x0` matrix.
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        or_fail(self.try_get(row, col))
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        or_fail(self.try_get_mut(row, col))
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(value, f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
