//! Configuration for the protocol algorithms.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `QOP_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::path::Path;

use qop_ir::DiagramArgs;
use serde::{Deserialize, Serialize};

use crate::decompose::DEFAULT_MAX_DEPTH;

/// Largest accepted diagram precision.
const MAX_PRECISION: usize = 16;

/// Complete protocol configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Recursive decomposition settings
    #[serde(default)]
    pub decompose: DecomposeConfig,
    /// Default diagram label arguments
    #[serde(default)]
    pub diagram: DiagramArgs,
}

/// Recursive decomposition settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposeConfig {
    /// Operations at this depth or deeper are not expanded
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Emit operations without a decomposition instead of failing
    #[serde(default)]
    pub emit_undecomposable: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        DecomposeConfig {
            max_depth: default_max_depth(),
            emit_undecomposable: false,
        }
    }
}

impl ProtocolConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ProtocolConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => ProtocolConfig::default(),
        };
        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that are set override the current values.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|name| std::env::var(name).ok())
    }

    /// Merge overrides looked up by variable name.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Decomposition
        if let Some(v) = lookup("QOP_DECOMPOSE_MAX_DEPTH") {
            if let Ok(val) = v.parse() {
                self.decompose.max_depth = val;
            }
        }
        if let Some(v) = lookup("QOP_DECOMPOSE_EMIT_UNDECOMPOSABLE") {
            if let Some(val) = parse_flag(&v) {
                self.decompose.emit_undecomposable = val;
            }
        }

        // Diagram labels
        if let Some(v) = lookup("QOP_DIAGRAM_PRECISION") {
            if v.eq_ignore_ascii_case("full") {
                self.diagram.precision = None;
            } else if let Ok(val) = v.parse() {
                self.diagram.precision = Some(val);
            }
        }
        if let Some(v) = lookup("QOP_DIAGRAM_ASCII") {
            if let Some(val) = parse_flag(&v) {
                self.diagram.use_unicode = !val;
            }
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decompose.max_depth == 0 {
            return Err(ConfigError::ValidationError(
                "decompose.max_depth must be greater than 0".to_string(),
            ));
        }
        if let Some(precision) = self.diagram.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::ValidationError(format!(
                    "diagram.precision must be at most {MAX_PRECISION}, got {precision}"
                )));
            }
        }
        if self.diagram.known_qubit_count == Some(0) {
            return Err(ConfigError::ValidationError(
                "diagram.known_qubit_count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ProtocolConfig::default();
        assert_eq!(config.decompose.max_depth, 64);
        assert!(!config.decompose.emit_undecomposable);
        assert_eq!(config.diagram.precision, Some(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = ProtocolConfig::from_yaml_str("decompose:\n  max_depth: 8\n").unwrap();
        assert_eq!(config.decompose.max_depth, 8);
        assert_eq!(config.diagram, DiagramArgs::default());

        let config = ProtocolConfig::from_yaml_str("diagram:\n  use_unicode: false\n").unwrap();
        assert!(!config.diagram.use_unicode);
        assert_eq!(config.diagram.precision, Some(3));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ProtocolConfig::from_yaml_str("decompose:\n  max_depth: 0\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            ProtocolConfig::from_yaml_str("diagram:\n  precision: 40\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            ProtocolConfig::from_yaml_str("decompose: [1, 2]"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ProtocolConfig::from_file("/nonexistent/qop.yaml"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_variable_overrides() {
        let vars: HashMap<&str, &str> = [
            ("QOP_DECOMPOSE_MAX_DEPTH", "12"),
            ("QOP_DIAGRAM_PRECISION", "full"),
            ("QOP_DIAGRAM_ASCII", "true"),
        ]
        .into_iter()
        .collect();
        let config =
            ProtocolConfig::default().merge_vars(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.decompose.max_depth, 12);
        assert_eq!(config.diagram.precision, None);
        assert!(!config.diagram.use_unicode);
        assert!(!config.decompose.emit_undecomposable);
    }

    #[test]
    fn test_unparseable_override_is_ignored() {
        let config = ProtocolConfig::default().merge_vars(|name| {
            (name == "QOP_DECOMPOSE_MAX_DEPTH").then(|| "deep".to_string())
        });
        assert_eq!(config.decompose.max_depth, 64);
    }
}
