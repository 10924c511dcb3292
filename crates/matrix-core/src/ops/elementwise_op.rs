// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise addition, subtraction, and Hadamard product.
//!
//! Only addition broadcasts, and only a single row across the rows of the
//! other operand. Subtraction, the Hadamard product, and all in-place forms
//! require identical shapes.

use crate::shape::Broadcast;
use crate::{Element, Matrix, MatrixError};

/// Computes `lhs + rhs` with single-row broadcasting.
///
/// The cases are tried in order:
/// 1. identical shapes: plain elementwise sum;
/// 2. `rhs` is `[1, N]` and `lhs` is `[M, N]`: `rhs` is added to every row of `lhs`;
/// 3. `lhs` is `[1, N]` and `rhs` is `[M, N]`: `lhs` is added to every row of `rhs`.
///
/// # Errors
/// Returns [`MatrixError::ShapeMismatch`] for any other combination.
pub fn add<T: Element>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let broadcast = lhs
        .shape()
        .add_broadcast(&rhs.shape())
        .ok_or_else(|| mismatch("add", lhs, rhs))?;

    let out = match broadcast {
        Broadcast::Exact => zip_with(lhs, rhs, |a, b| a + b),
        Broadcast::RowRhs => broadcast_row(lhs, rhs.as_slice(), |full, row| full + row),
        Broadcast::RowLhs => broadcast_row(rhs, lhs.as_slice(), |full, row| row + full),
    };
    Ok(out)
}

/// Computes `lhs - rhs`; shapes must match exactly.
pub fn sub<T: Element>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    ensure_same_shape("sub", lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| a - b))
}

/// Computes the Hadamard (elementwise) product; shapes must match exactly.
pub fn hadamard<T: Element>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    ensure_same_shape("hadamard", lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| a * b))
}

/// `lhs += rhs` without broadcasting.
pub fn add_assign<T: Element>(lhs: &mut Matrix<T>, rhs: &Matrix<T>) -> Result<(), MatrixError> {
    ensure_same_shape("add_assign", lhs, rhs)?;
    zip_in_place(lhs, rhs, |a, b| *a += b);
    Ok(())
}

/// `lhs -= rhs`.
pub fn sub_assign<T: Element>(lhs: &mut Matrix<T>, rhs: &Matrix<T>) -> Result<(), MatrixError> {
    ensure_same_shape("sub_assign", lhs, rhs)?;
    zip_in_place(lhs, rhs, |a, b| *a -= b);
    Ok(())
}

/// In-place Hadamard product.
pub fn hadamard_assign<T: Element>(
    lhs: &mut Matrix<T>,
    rhs: &Matrix<T>,
) -> Result<(), MatrixError> {
    ensure_same_shape("hadamard", lhs, rhs)?;
    zip_in_place(lhs, rhs, |a, b| *a *= b);
    Ok(())
}

fn ensure_same_shape<T>(
    op: &'static str,
    lhs: &Matrix<T>,
    rhs: &Matrix<T>,
) -> Result<(), MatrixError> {
    if lhs.shape() != rhs.shape() {
        return Err(mismatch(op, lhs, rhs));
    }
    Ok(())
}

fn mismatch<T>(op: &'static str, lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixError {
    MatrixError::ShapeMismatch {
        op,
        lhs: lhs.shape(),
        rhs: rhs.shape(),
    }
}

fn zip_with<T, F>(lhs: &Matrix<T>, rhs: &Matrix<T>, f: F) -> Matrix<T>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    let data = lhs
        .as_slice()
        .iter()
        .zip(rhs.as_slice())
        .map(|(&a, &b)| f(a, b))
        .collect();
    Matrix::from_parts(data, lhs.rows(), lhs.cols())
}

fn zip_in_place<T, F>(lhs: &mut Matrix<T>, rhs: &Matrix<T>, f: F)
where
    T: Element,
    F: Fn(&mut T, T),
{
    for (a, &b) in lhs.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
        f(a, b);
    }
}

/// Combines `row` with every row of `full`; the result has `full`'s shape.
fn broadcast_row<T, F>(full: &Matrix<T>, row: &[T], f: F) -> Matrix<T>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    let mut data = Vec::with_capacity(full.len());
    for full_row in full.iter_rows() {
        data.extend(full_row.iter().zip(row).map(|(&a, &b)| f(a, b)));
    }
    Matrix::from_parts(data, full.rows(), full.cols())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn grid() -> Matrix<i32> {
        Matrix::from_rows(&[vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]])
    }

    #[test]
    fn test_add_exact() {
        let a = grid();
        let sum = add(&a, &a).unwrap();
        assert_eq!(sum, a.map(|x| 2 * x));
    }

    #[test]
    fn test_add_broadcast_rhs_row() {
        let a = grid();
        let r = Matrix::from_rows(&[vec![10, 20, 30, 40]]);
        let sum = add(&a, &r).unwrap();
        assert_eq!(sum.shape(), Shape::new(3, 4));
        assert_eq!(sum.row(0), &[11, 22, 33, 44]);
        assert_eq!(sum.row(2), &[19, 30, 41, 52]);
    }

    #[test]
    fn test_add_broadcast_lhs_row_matches_rhs_case() {
        let a = grid();
        let r = Matrix::from_rows(&[vec![10, 20, 30, 40]]);
        let left = add(&r, &a).unwrap();
        assert_eq!(left.shape(), Shape::new(3, 4));
        assert_eq!(left, add(&a, &r).unwrap());
    }

    #[test]
    fn test_add_broadcast_onto_empty_rows() {
        // A [0, 2] matrix plus a [1, 2] row broadcasts to zero rows.
        let empty = Matrix::<i32>::zeros(0, 2);
        let r = Matrix::from_rows(&[vec![1, 2]]);
        assert_eq!(add(&empty, &r).unwrap().shape(), Shape::new(0, 2));
    }

    #[test]
    fn test_add_rejects_column_broadcast() {
        let a = grid();
        let col = Matrix::<i32>::zeros(3, 1);
        assert!(add(&a, &col).is_err());
        assert!(add(&col, &a).is_err());
    }

    #[test]
    fn test_add_rejects_transposed_shapes() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 2);
        assert_eq!(
            add(&a, &b).unwrap_err(),
            MatrixError::ShapeMismatch {
                op: "add",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(3, 2),
            }
        );
    }

    #[test]
    fn test_sub_has_no_broadcast() {
        let a = grid();
        let r = Matrix::<i32>::zeros(1, 4);
        assert!(sub(&a, &r).is_err());
        assert_eq!(sub(&a, &a).unwrap(), Matrix::zeros(3, 4));
    }

    #[test]
    fn test_hadamard_has_no_broadcast() {
        let a = grid();
        let r = Matrix::new(1, 4, 2);
        assert!(hadamard(&a, &r).is_err());
        assert_eq!(hadamard(&a, &Matrix::new(3, 4, 2)).unwrap(), a.map(|x| 2 * x));
    }

    #[test]
    fn test_in_place_ops() {
        let mut a = grid();
        let ones = Matrix::new(3, 4, 1);

        add_assign(&mut a, &ones).unwrap();
        assert_eq!(a[(0, 0)], 2);

        sub_assign(&mut a, &ones).unwrap();
        assert_eq!(a, grid());

        hadamard_assign(&mut a, &Matrix::new(3, 4, -1)).unwrap();
        assert_eq!(a[(2, 3)], -12);
    }

    #[test]
    fn test_add_assign_has_no_broadcast() {
        let mut a = grid();
        let r = Matrix::<i32>::zeros(1, 4);
        assert!(add_assign(&mut a, &r).is_err());
        // The receiver is untouched on failure.
        assert_eq!(a, grid());
    }
}
