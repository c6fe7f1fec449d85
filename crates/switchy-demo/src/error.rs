//! Error types for the gallery demo.

use std::path::PathBuf;
use switchy_test::SelectorError;
use thiserror::Error;

/// Error loading or validating a gallery configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    /// File extension is neither YAML nor TOML
    #[error("unsupported config format: {0} (expected .yaml, .yml or .toml)")]
    UnknownFormat(PathBuf),
    /// Item type names no switch variant
    #[error("unknown switch variant: {0}")]
    UnknownVariant(String),
    /// Invalid value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A scripted click named no widget
    #[error("click failed: {0}")]
    Click(#[from] SelectorError),
    /// Draw list serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid("grid.min_cell_width", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid value for 'grid.min_cell_width': must be positive"
        );

        let err = ConfigError::UnknownVariant("FlipSwitch".to_string());
        assert_eq!(err.to_string(), "unknown switch variant: FlipSwitch");

        let err = ConfigError::UnknownFormat(PathBuf::from("gallery.json"));
        assert!(err.to_string().contains("gallery.json"));
    }

    #[test]
    fn test_demo_error_wraps_config_transparently() {
        let err: DemoError = ConfigError::UnknownVariant("X".to_string()).into();
        assert_eq!(err.to_string(), "unknown switch variant: X");
    }

    #[test]
    fn test_click_error_names_selector() {
        let err: DemoError = SelectorError::NotFound("#missing".to_string()).into();
        assert_eq!(err.to_string(), "click failed: no widget matching '#missing'");
    }
}
