// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Seeded random initialization.
//!
//! [`Matrix::random`] draws from one generator shared by the whole process.
//! It is seeded once with [`GLOBAL_SEED`] on first use and never reseeded, so
//! successive calls continue a single stream: two calls in one run give
//! different matrices, and a fresh run replays the same sequence of matrices.
//!
//! The generator sits behind a `Mutex`, so concurrent callers cannot corrupt
//! it, but the order in which threads draw decides who gets which values.
//! Callers that need reproducible output from several threads must order
//! their own calls, or use [`Matrix::random_with`] with a generator they own.

use std::ops::Neg;
use std::sync::{Mutex, OnceLock, PoisonError};

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::or_fail;
use crate::{Element, Matrix, MatrixError, Shape};

/// Seed of the process-wide generator behind [`Matrix::random`].
pub const GLOBAL_SEED: u64 = 42;

static GLOBAL_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn global_rng() -> &'static Mutex<StdRng> {
    GLOBAL_RNG.get_or_init(|| {
        tracing::debug!(seed = GLOBAL_SEED, "seeding process-wide matrix generator");
        Mutex::new(StdRng::seed_from_u64(GLOBAL_SEED))
    })
}

/// Element types [`Matrix::random`] can draw.
///
/// Implemented for the primitive floats and signed integers.
pub trait RandomWeight: Element + SampleUniform + PartialOrd + Neg<Output = Self> {
    /// Whether `[-self, self]` is a range the uniform sampler can span.
    fn is_valid_max_weight(self) -> bool;
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl RandomWeight for $t {
            // The sampler works on `high - low`, which must stay finite.
            fn is_valid_max_weight(self) -> bool {
                self >= 0.0 && (self + self).is_finite()
            }
        }
    )*};
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl RandomWeight for $t {
            fn is_valid_max_weight(self) -> bool {
                self >= 0
            }
        }
    )*};
}

float_weight!(f32, f64);
int_weight!(i8, i16, i32, i64, i128, isize);

impl<T: RandomWeight> Matrix<T> {
    /// Creates a `rows x cols` matrix of i.i.d. uniform draws from
    /// `[-max_weight, max_weight]`, using the process-wide stream.
    ///
    /// # Panics
    /// Panics if `max_weight` is negative or NaN, if `2 * max_weight` is not
    /// finite, or if `rows * cols` overflows `usize`.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let w = Matrix::random(3, 4, 0.5f64);
    /// assert!(w.as_slice().iter().all(|x| x.abs() <= 0.5));
    /// ```
    #[track_caller]
    pub fn random(rows: usize, cols: usize, max_weight: T) -> Self {
        or_fail(Self::try_random(rows, cols, max_weight))
    }

    /// Checked form of [`random`](Matrix::random). The stream does not advance
    /// on error.
    pub fn try_random(rows: usize, cols: usize, max_weight: T) -> Result<Self, MatrixError> {
        // A panic elsewhere while holding the lock leaves the generator state intact.
        let mut rng = global_rng().lock().unwrap_or_else(PoisonError::into_inner);
        Self::try_random_with(&mut *rng, rows, cols, max_weight)
    }

    /// Like [`random`](Matrix::random), but draws from a caller-supplied generator.
    #[track_caller]
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        rows: usize,
        cols: usize,
        max_weight: T,
    ) -> Self {
        or_fail(Self::try_random_with(rng, rows, cols, max_weight))
    }

    /// Checked form of [`random_with`](Matrix::random_with).
    pub fn try_random_with<R: Rng + ?Sized>(
        rng: &mut R,
        rows: usize,
        cols: usize,
        max_weight: T,
    ) -> Result<Self, MatrixError> {
        if !max_weight.is_valid_max_weight() {
            return Err(MatrixError::InvalidMaxWeight {
                value: format!("{max_weight:?}"),
            });
        }
        let len = Shape::new(rows, cols).try_num_elements()?;
        let dist = Uniform::<T>::new_inclusive(-max_weight, max_weight);
        let data = (0..len).map(|_| dist.sample(rng)).collect();
        Ok(Self::from_parts(data, rows, cols))
    }
}
