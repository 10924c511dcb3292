// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dmx bench` command: time the matrix product across sizes.
//!
//! Operands come from the process-wide random stream, so the inputs are the
//! same on every run. Prints mean latency and throughput per size.

use std::time::{Duration, Instant};

use matrix_core::Matrix;

use crate::CliConfig;

pub fn execute(config: &CliConfig) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                dmx · Product Benchmark               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Sizes:   {:?}", config.sizes);
    println!("  Repeats: {}", config.repeats);
    println!();

    println!(
        "  {:<14} {:>12} {:>12} {:>10}",
        "Shape", "Mean", "Best", "GFLOP/s",
    );
    println!("  {}", "-".repeat(52));

    for &n in &config.sizes {
        let r = run_single(n, config.repeats, config.max_weight);
        println!(
            "  {:<14} {:>10.3}ms {:>10.3}ms {:>10.2}",
            format!("{n}x{n}"),
            r.mean.as_secs_f64() * 1e3,
            r.best.as_secs_f64() * 1e3,
            r.gflops(),
        );
    }
    println!();
    Ok(())
}

#[derive(Debug)]
struct BenchResult {
    n: usize,
    mean: Duration,
    best: Duration,
}

impl BenchResult {
    /// `2 n^3` floating-point operations per product, at the mean latency.
    fn gflops(&self) -> f64 {
        let secs = self.mean.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        let flops = 2.0 * (self.n as f64).powi(3);
        flops / secs / 1e9
    }
}

fn run_single(n: usize, repeats: usize, max_weight: f64) -> BenchResult {
    let a = Matrix::random(n, n, max_weight);
    let b = Matrix::random(n, n, max_weight);

    // Warm up caches and the allocator.
    let _ = std::hint::black_box(&a * &b);

    let mut total = Duration::ZERO;
    let mut best = Duration::MAX;
    for _ in 0..repeats {
        let start = Instant::now();
        let c = &a * &b;
        let elapsed = start.elapsed();
        std::hint::black_box(c);
        total += elapsed;
        best = best.min(elapsed);
    }

    let mean = mean_duration(total, repeats);
    tracing::debug!(n, ?mean, ?best, "product timed");
    BenchResult { n, mean, best }
}

/// `total / repeats`, for any repeat count `usize` can hold.
fn mean_duration(total: Duration, repeats: usize) -> Duration {
    total.div_f64(repeats.max(1) as f64)
}
