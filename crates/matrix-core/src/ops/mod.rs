// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix arithmetic kernels.
//!
//! Each operation validates shapes up front and returns a
//! [`MatrixError`](crate::MatrixError) on a violation; the operator
//! overloads in `arith` turn those errors into panics.

mod elementwise_op;
mod matmul_op;
mod matvec_op;
mod transpose_op;

pub use elementwise_op::{add, add_assign, hadamard, hadamard_assign, sub, sub_assign};
pub use matmul_op::matmul;
pub use matvec_op::matvec;
pub use transpose_op::transpose;
