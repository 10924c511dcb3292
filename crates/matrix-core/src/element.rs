// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Numeric element types a [`crate::Matrix`] can hold.

use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign, SubAssign};

use num_traits::Num;

/// Bound satisfied by every matrix element type.
///
/// Covers all primitive integer and floating-point types. `T::zero()` is the
/// fill value for freshly allocated results, matching what an accumulator
/// starts from in the matrix product.
pub trait Element: Copy + Debug + PartialEq + Num + AddAssign + SubAssign + MulAssign {}

impl<T> Element for T where T: Copy + Debug + PartialEq + Num + AddAssign + SubAssign + MulAssign {}
