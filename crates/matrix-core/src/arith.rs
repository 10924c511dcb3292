// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operator overloads for [`Matrix`].
//!
//! Matrix-matrix operators panic on a shape violation with the
//! corresponding [`MatrixError`](crate::MatrixError) message; use the
//! `try_*` methods when shapes are only known at run time.
//!
//! | Expression | Meaning |
//! |---|---|
//! | `a + b` | elementwise sum, single-row broadcasting |
//! | `a - b` | elementwise difference |
//! | `a * b` | matrix product |
//! | `a * &v[..]` | matrix-vector product |
//! | `a + s`, `a - s`, `a * s`, `a / s` | scalar applied to every element |

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use crate::error::or_fail;
use crate::{ops, Element, Matrix};

impl<T: Element> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_fail(ops::add(self, rhs))
    }
}

impl<T: Element> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_fail(ops::sub(self, rhs))
    }
}

impl<T: Element> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_fail(ops::matmul(self, rhs))
    }
}

/// Forwards the owned/borrowed combinations to the `&a op &b` impl.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl<T: Element> $trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Element> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                (&self).$method(rhs)
            }
        }

        impl<T: Element> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<T: Element> AddAssign<&Matrix<T>> for Matrix<T> {
    /// Exact shapes only; `+=` never broadcasts.
    #[track_caller]
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        or_fail(ops::add_assign(self, rhs));
    }
}

impl<T: Element> AddAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Element> SubAssign<&Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        or_fail(ops::sub_assign(self, rhs));
    }
}

impl<T: Element> SubAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

impl<T: Element> MulAssign<&Matrix<T>> for Matrix<T> {
    /// Replaces `self` with `self * rhs`, whose shape may differ.
    #[track_caller]
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = or_fail(ops::matmul(self, rhs));
    }
}

impl<T: Element> MulAssign<Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self *= &rhs;
    }
}

impl<T: Element> Mul<&[T]> for &Matrix<T> {
    type Output = Vec<T>;

    #[track_caller]
    fn mul(self, rhs: &[T]) -> Vec<T> {
        or_fail(ops::matvec(self, rhs))
    }
}

impl<T: Element> Mul<&Vec<T>> for &Matrix<T> {
    type Output = Vec<T>;

    #[track_caller]
    fn mul(self, rhs: &Vec<T>) -> Vec<T> {
        self * rhs.as_slice()
    }
}

/// Scalar operators: the borrowed form allocates, the owned form reuses the buffer.
macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element> $trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                self.map(|x| x $op rhs)
            }
        }

        impl<T: Element> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: T) -> Matrix<T> {
                self.map_in_place(|x| x $op rhs);
                self
            }
        }
    };
}

scalar_op!(Add, add, +);
scalar_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);
scalar_op!(Div, div, /);

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|x| *x *= rhs);
    }
}
