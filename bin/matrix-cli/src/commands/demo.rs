// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dmx demo` command: walk through every matrix operation on small inputs.

use matrix_core::Matrix;

pub fn execute() -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║               dmx · Operation Walkthrough            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);

    // ── Products ───────────────────────────────────────────────
    section("A", &a);
    section("B", &b);
    section("A * B", &(&a * &b));
    section("A^T", &a.transpose());
    println!("  A * [1, 1] = {:?}", &a * &[1.0, 1.0][..]);
    println!("  diag(A)    = {:?}", a.diagonal());
    println!();

    // ── Elementwise ────────────────────────────────────────────
    section("A + B", &(&a + &b));
    section("A - B", &(&a - &b));
    section("A ∘ B (Hadamard)", &a.hadamard(&b));
    section("A / 2", &(&a / 2.0));
    section("map(x -> x^2)", &a.map(|x| x * x));

    // ── Broadcasting ───────────────────────────────────────────
    let grid = Matrix::from_vec((1..=12).map(|x| x as f64).collect(), 3, 4);
    let row = Matrix::from_rows(&[vec![0.5, 1.0, 1.5, 2.0]]);
    section("G (3x4)", &grid);
    section("r (1x4)", &row);
    section("G + r", &(&grid + &row));
    section("r + G", &(&row + &grid));

    match grid.try_add(&grid.transpose()) {
        Ok(_) => println!("  G + G^T unexpectedly succeeded"),
        Err(e) => println!("  G + G^T rejected: {e}"),
    }
    println!();

    Ok(())
}

fn section(label: &str, m: &Matrix<f64>) {
    println!("  {label} {}:", m.shape());
    for line in m.to_string().lines() {
        println!("    {line}");
    }
    println!();
}
