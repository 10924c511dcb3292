// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dmx
//!
//! Command-line driver for the `matrix-core` crate.
//!
//! ## Usage
//! ```bash
//! # Print the worked examples (product, transpose, broadcasting)
//! dmx demo
//!
//! # Draw two 4x4 matrices from the process-wide seeded stream
//! dmx random --rows 4 --cols 4 --draws 2
//!
//! # Time the matrix product on square random matrices
//! dmx bench --sizes 64,128,256 --repeats 5
//! ```

mod commands;
mod config;
mod error;

use clap::{Parser, Subcommand};

use config::CliConfig;
use error::CliError;

#[derive(Parser)]
#[command(
    name = "dmx",
    about = "Dense matrix toolkit: demos, seeded random matrices, and product timings",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print worked examples of every operation.
    Demo,

    /// Draw matrices from the process-wide random stream (seed 42).
    Random {
        /// Number of rows.
        #[arg(short, long, default_value_t = 4)]
        rows: usize,

        /// Number of columns.
        #[arg(short = 'k', long, default_value_t = 4)]
        cols: usize,

        /// Entries are drawn from [-max_weight, max_weight].
        #[arg(short, long)]
        max_weight: Option<f64>,

        /// How many consecutive matrices to draw.
        #[arg(short, long, default_value_t = 1)]
        draws: usize,
    },

    /// Time the matrix product on random square matrices.
    Bench {
        /// Comma-separated square sizes (e.g., "64,128,256").
        #[arg(short, long)]
        sizes: Option<String>,

        /// Timed products per size.
        #[arg(short, long)]
        repeats: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let mut config = CliConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Demo => commands::demo::execute(),
        Commands::Random {
            rows,
            cols,
            max_weight,
            draws,
        } => {
            if let Some(w) = max_weight {
                config.max_weight = w;
            }
            config.validate()?;
            commands::random::execute(rows, cols, config.max_weight, draws)
        }
        Commands::Bench { sizes, repeats } => {
            if let Some(list) = sizes {
                config.sizes = config::parse_sizes(&list)?;
            }
            if let Some(n) = repeats {
                config.repeats = n;
            }
            config.validate()?;
            commands::bench::execute(&config)
        }
    }
}
