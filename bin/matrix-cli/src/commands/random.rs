// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dmx random` command: draw matrices from the process-wide seeded stream.
//!
//! Consecutive draws continue one stream, so every run of the same command
//! prints the same sequence of matrices.

use matrix_core::{Matrix, GLOBAL_SEED};

/// Matrices with more elements than this are summarised instead of printed.
const PRINT_LIMIT: usize = 64;

pub fn execute(rows: usize, cols: usize, max_weight: f64, draws: usize) -> anyhow::Result<()> {
    tracing::info!(rows, cols, max_weight, draws, "drawing random matrices");
    println!(
        "  Stream seed {GLOBAL_SEED}, entries in [-{max_weight}, {max_weight}]"
    );
    println!();

    for draw in 1..=draws {
        let m = Matrix::try_random(rows, cols, max_weight)?;
        println!("  Draw {draw} {}:", m.shape());
        if m.len() <= PRINT_LIMIT {
            for line in m.to_string().lines() {
                println!("    {line}");
            }
        } else {
            let s = Summary::of(m.as_slice());
            println!(
                "    min {:+.6}  max {:+.6}  mean {:+.6}",
                s.min, s.max, s.mean
            );
        }
        println!();
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
struct Summary {
    min: f64,
    max: f64,
    mean: f64,
}

impl Summary {
    fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }
        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), &x| (lo.min(x), hi.max(x), sum + x),
        );
        Self {
            min,
            max,
            mean: sum / values.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let s = Summary::of(&[1.0, -2.0, 4.0]);
        assert_eq!(s.min, -2.0);
        assert_eq!(s.max, 4.0);
        assert!((s.mean - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_execute_rejects_bad_inputs() {
        assert!(execute(2, 2, f64::MAX, 1).is_err());
        assert!(execute(usize::MAX, 2, 1.0, 1).is_err());
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::of(&[]).mean, 0.0);
    }
}
