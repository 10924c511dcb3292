// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication operation.

use crate::{Element, Matrix, MatrixError};

/// Computes `lhs * rhs`.
///
/// `lhs` is `[M, K]`, `rhs` is `[K, N]`, and the result is a fresh `[M, N]`
/// matrix.
///
/// # Errors
/// Returns [`MatrixError::ShapeMismatch`] if `lhs.cols() != rhs.rows()`, and
/// [`MatrixError::SizeOverflow`] if `[M, N]` has more elements than `usize`
/// can count (possible when `K == 0`).
pub fn matmul<T: Element>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let out_shape = lhs
        .shape()
        .matmul_output(&rhs.shape())
        .ok_or(MatrixError::ShapeMismatch {
            op: "matmul",
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        })?;

    let (m, k, n) = (lhs.rows(), lhs.cols(), rhs.cols());
    tracing::trace!(m, k, n, "matmul");

    let mut c = vec![T::zero(); out_shape.try_num_elements()?];
    matmul_generic(lhs.as_slice(), rhs.as_slice(), &mut c, m, k, n);

    Ok(Matrix::from_parts(c, m, n))
}

/// Portable row-accumulate kernel; `c` must arrive zeroed.
///
/// ikj loop order: `a[i, p]` is loaded once per `(i, p)` pair and the inner
/// loop is an axpy of row `p` of `b` into row `i` of `c`, so both inner
/// streams are sequential in memory.
fn matmul_generic<T: Element>(a: &[T], b: &[T], c: &mut [T], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
}
