// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Algebraic properties of the matrix operations.
//!
//! Integer matrices are used wherever the property is exact, so the checks
//! compare with `==`; the associativity check runs on `f64` with a tolerance.

use matrix_core::{Matrix, MatrixError, Shape};
use proptest::prelude::*;

// ── Strategies ─────────────────────────────────────────────────

fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-100i64..100, rows * cols)
        .prop_map(move |data| Matrix::from_vec(data, rows, cols))
}

fn float_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    prop::collection::vec(-1.0f64..1.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(data, rows, cols))
}

/// Two matrices of the same random shape.
fn same_shape_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1usize..8, 1usize..8).prop_flat_map(|(r, c)| (int_matrix(r, c), int_matrix(r, c)))
}

/// A chain `[m, k] x [k, n] x [n, p]`.
fn product_chain() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Matrix<f64>)> {
    (1usize..6, 1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(m, k, n, p)| {
        (float_matrix(m, k), float_matrix(k, n), float_matrix(n, p))
    })
}

fn approx_eq(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) -> bool {
    a.shape() == b.shape()
        && a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(x, y)| (x - y).abs() <= tol)
}

proptest! {
    #[test]
    fn add_then_sub_restores((a, b) in same_shape_pair()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn hadamard_is_commutative((a, b) in same_shape_pair()) {
        prop_assert_eq!(a.hadamard(&b), b.hadamard(&a));
    }

    #[test]
    fn transpose_is_involutive(a in (0usize..8, 0usize..8).prop_flat_map(|(r, c)| int_matrix(r, c))) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn product_shape_and_associativity((a, b, c) in product_chain()) {
        let ab = &a * &b;
        prop_assert_eq!(ab.shape(), Shape::new(a.rows(), b.cols()));

        let left = &ab * &c;
        let right = &a * &(&b * &c);
        prop_assert!(approx_eq(&left, &right, 1e-9));
    }

    #[test]
    fn transpose_of_product((a, b, _c) in product_chain()) {
        let lhs = (&a * &b).transpose();
        let rhs = &b.transpose() * &a.transpose();
        prop_assert!(approx_eq(&lhs, &rhs, 1e-12));
    }

    #[test]
    fn matvec_matches_single_column_product(
        (a, v) in (1usize..8, 1usize..8).prop_flat_map(|(r, c)| {
            (int_matrix(r, c), prop::collection::vec(-100i64..100, c))
        })
    ) {
        let as_column = Matrix::from_vec(v.clone(), v.len(), 1);
        prop_assert_eq!(a.matvec(&v), (&a * &as_column).into_vec());
    }

    #[test]
    fn row_broadcast_is_symmetric(
        (a, r) in (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            (int_matrix(rows, cols), int_matrix(1, cols))
        })
    ) {
        let right = &a + &r;
        let left = &r + &a;
        prop_assert_eq!(&right, &left);
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert_eq!(right[(i, j)], a[(i, j)] + r[(0, j)]);
            }
        }
    }

    #[test]
    fn scalar_ops_preserve_shape(a in (1usize..8, 1usize..8).prop_flat_map(|(r, c)| int_matrix(r, c)), s in 1i64..10) {
        prop_assert_eq!((&a * s).shape(), a.shape());
        prop_assert_eq!(&(&a + s) - s, a.clone());
        prop_assert_eq!(&(&a * s) / s, a);
    }
}

// ── Worked examples ────────────────────────────────────────────

#[test]
fn worked_product_and_transpose() {
    let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
    let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]);
    assert_eq!(&a * &b, Matrix::from_rows(&[vec![19, 22], vec![43, 50]]));
    assert_eq!(a.transpose(), Matrix::from_rows(&[vec![1, 3], vec![2, 4]]));
    assert_eq!(&a * &vec![1, 1], vec![3, 7]);
}

#[test]
fn worked_broadcast_3x4() {
    let a = Matrix::from_vec((1..=12).map(|x| x as f64).collect(), 3, 4);
    let r = Matrix::from_rows(&[vec![0.5, 1.0, 1.5, 2.0]]);

    let expected = Matrix::from_rows(&[
        vec![1.5, 3.0, 4.5, 6.0],
        vec![5.5, 7.0, 8.5, 10.0],
        vec![9.5, 11.0, 12.5, 14.0],
    ]);
    assert_eq!(&a + &r, expected);
    assert_eq!(&r + &a, expected);
}

#[test]
fn mismatched_shapes_fail_fast() {
    let a = Matrix::<f32>::zeros(2, 3);
    let b = Matrix::<f32>::zeros(3, 2);

    for result in [a.try_add(&b), a.try_sub(&b), a.try_hadamard(&b)] {
        assert!(matches!(result, Err(MatrixError::ShapeMismatch { .. })));
    }

    assert!(std::panic::catch_unwind(|| &a + &b).is_err());
    assert!(std::panic::catch_unwind(|| &a - &b).is_err());
    assert!(std::panic::catch_unwind(|| a.hadamard(&b)).is_err());
}
