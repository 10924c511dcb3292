// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix transpose.

use crate::{Element, Matrix};

/// Returns a new `(cols, rows)` matrix with `out[(j, i)] == m[(i, j)]`.
pub fn transpose<T: Element>(m: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = (m.rows(), m.cols());
    let src = m.as_slice();
    let mut data = vec![T::zero(); rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            data[j * rows + i] = src[i * cols + j];
        }
    }
    Matrix::from_parts(data, cols, rows)
}
