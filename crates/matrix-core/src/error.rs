// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix operations.

use crate::Shape;

/// Precondition violations detected by matrix operations.
///
/// The operator forms (`+`, `*`, indexing, ...) panic with this error's
/// `Display` text; the `try_*` methods hand it back instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Two matrices have incompatible shapes for the requested operation.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A nested input row does not have the same length as the first row.
    #[error("ragged input: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A flat buffer does not hold exactly `rows * cols` elements.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// `rows * cols` does not fit in `usize`.
    #[error("shape [{rows}, {cols}] overflows the addressable element count")]
    SizeOverflow { rows: usize, cols: usize },

    /// A random-init half-width is negative, NaN, or too large to span.
    #[error("invalid max weight {value}: expected a finite, non-negative half-width")]
    InvalidMaxWeight { value: String },

    /// An element index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {shape} matrix")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    /// A vector operand does not match the matrix column count.
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },
}

impl MatrixError {
    /// Aborts the current operation with this error as the panic message.
    #[cold]
    #[track_caller]
    pub(crate) fn fail(self) -> ! {
        panic!("{self}")
    }
}

/// Unwraps a checked result, turning a violation into a panic at the caller.
#[track_caller]
pub(crate) fn or_fail<T>(result: Result<T, MatrixError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => e.fail(),
    }
}
