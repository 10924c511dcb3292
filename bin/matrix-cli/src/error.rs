// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the command-line driver.

/// Errors raised while assembling a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A comma-separated size list contained a bad entry.
    #[error("invalid size '{value}': expected a positive integer")]
    InvalidSize { value: String },
}
