// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix-vector product.

use crate::{Element, Matrix, MatrixError};

/// Computes `matrix * vector` for a column vector of length `matrix.cols()`.
///
/// # Errors
/// Returns [`MatrixError::VectorLengthMismatch`] if the lengths disagree.
pub fn matvec<T: Element>(matrix: &Matrix<T>, vector: &[T]) -> Result<Vec<T>, MatrixError> {
    if vector.len() != matrix.cols() {
        return Err(MatrixError::VectorLengthMismatch {
            expected: matrix.cols(),
            actual: vector.len(),
        });
    }

    Ok(matrix
        .iter_rows()
        .map(|row| {
            row.iter()
                .zip(vector)
                .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
        })
        .collect())
}
