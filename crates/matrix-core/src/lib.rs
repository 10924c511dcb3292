// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-core
//!
//! A row-major dense matrix value type for numeric prototyping code.
//!
//! This crate provides:
//! - [`Matrix`] — an owned `rows x cols` matrix over any [`Element`] type.
//! - [`Shape`] — the `(rows, cols)` descriptor and its compatibility rules.
//! - Elementwise `+`/`-`/Hadamard, with single-row broadcasting for `+`.
//! - A cache-friendly `(i, k, j)` matrix product, transpose, matrix-vector
//!   product, scalar operators, and component-wise maps.
//! - Reproducible random initialization from one process-wide stream.
//!
//! # Errors
//! Shape and index violations are programmer errors. Operators and plain
//! accessors panic with a [`MatrixError`] message; each has a `try_*`
//! counterpart that returns the error instead.
//!
//! ```
//! use matrix_core::Matrix;
//!
//! let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
//! assert_eq!(a.transpose(), Matrix::from_rows(&[vec![1.0, 3.0], vec![2.0, 4.0]]));
//! assert_eq!(&a * &[1.0, 1.0][..], vec![3.0, 7.0]);
//! assert!(a.try_add(&Matrix::zeros(3, 2)).is_err());
//! ```

mod arith;
mod element;
mod error;
mod matrix;
pub mod ops;
mod random;
mod shape;

pub use element::Element;
pub use error::MatrixError;
pub use matrix::Matrix;
pub use random::{RandomWeight, GLOBAL_SEED};
pub use shape::{Broadcast, Shape};
