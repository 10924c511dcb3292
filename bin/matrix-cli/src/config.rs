// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Driver configuration loaded from TOML files or built from defaults.
//!
//! # TOML Format
//! ```toml
//! max_weight = 1.0
//! sizes = [64, 128, 256]
//! repeats = 5
//! ```
//!
//! Every key is optional; command-line flags override file values.

use std::path::Path;

use crate::CliError;

/// Configuration shared by the `random` and `bench` commands.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Half-width of the uniform range random entries are drawn from.
    pub max_weight: f64,
    /// Square matrix sizes timed by `bench`.
    pub sizes: Vec<usize>,
    /// Timed products per size.
    pub repeats: usize,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, CliError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| CliError::ConfigError(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Checks the values the commands rely on. Run again after CLI overrides.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        // The uniform range spans 2 * max_weight, which must stay finite.
        let w = self.max_weight;
        if !(w >= 0.0 && (w + w).is_finite()) {
            return Err(CliError::ConfigError(format!(
                "max_weight must be non-negative with a finite range, got {w}"
            )));
        }
        if self.repeats == 0 {
            return Err(CliError::ConfigError("repeats must be at least 1".into()));
        }
        if let Some(&bad) = self.sizes.iter().find(|&&n| n == 0) {
            return Err(CliError::InvalidSize {
                value: bad.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_weight: 1.0,
            sizes: vec![64, 128, 256],
            repeats: 5,
        }
    }
}

/// Parses a comma-separated list of positive sizes, e.g. `"64,128,256"`.
pub fn parse_sizes(list: &str) -> Result<Vec<usize>, CliError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(CliError::InvalidSize {
                value: s.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = CliConfig::default();
        assert_eq!(c.max_weight, 1.0);
        assert_eq!(c.sizes, vec![64, 128, 256]);
        assert_eq!(c.repeats, 5);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
max_weight = 0.5
sizes = [16, 32]
repeats = 3
"#;
        let c = CliConfig::from_toml(toml).unwrap();
        assert_eq!(c.max_weight, 0.5);
        assert_eq!(c.sizes, vec![16, 32]);
        assert_eq!(c.repeats, 3);
    }

    #[test]
    fn test_rejects_unspannable_max_weight() {
        assert!(CliConfig::from_toml("max_weight = 1e308").is_err());
        assert!(CliConfig::from_toml("max_weight = -0.5").is_err());
        assert!(CliConfig::from_toml("max_weight = nan").is_err());
        assert!(CliConfig::from_toml("max_weight = 1e307").is_ok());
    }

    #[test]
    fn test_validate_catches_overrides() {
        let mut c = CliConfig::default();
        c.max_weight = f64::MAX;
        assert!(c.validate().is_err());
        c.max_weight = 2.0;
        c.repeats = 0;
        assert!(c.validate().is_err());
        c.repeats = 1;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = CliConfig::from_toml("repeats = 2").unwrap();
        assert_eq!(c.repeats, 2);
        assert_eq!(c.sizes, CliConfig::default().sizes);
    }

    #[test]
    fn test_rejects_zero_repeats() {
        assert!(CliConfig::from_toml("repeats = 0").is_err());
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = CliConfig::from_toml("sizes = [8, 0]").unwrap_err();
        assert!(matches!(err, CliError::InvalidSize { .. }));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(CliConfig::from_toml("sizes = \"lots\"").is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = CliConfig::default();
        let back = CliConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("64, 128,256").unwrap(), vec![64, 128, 256]);
        assert!(parse_sizes("64,abc").is_err());
        assert!(parse_sizes("0").is_err());
    }
}
