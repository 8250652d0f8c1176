//! Error types for configuration loading.

use selectify_core::ColorParseError;
use thiserror::Error;

/// Errors produced while loading or validating a [`SelectifyConfig`](crate::SelectifyConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML document could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two flat options, or two grouped options, share a key.
    #[error("duplicate option key: {0}")]
    DuplicateKey(String),

    /// An option has an empty key.
    #[error("option with text {text:?} has an empty key")]
    EmptyKey {
        /// Text of the offending option
        text: String,
    },

    /// Two groups share a label.
    #[error("duplicate group label: {0}")]
    DuplicateGroupLabel(String),

    /// A style color is not a valid hex string.
    #[error("invalid color {value:?} for {region}.{field}: {source}")]
    InvalidColor {
        /// Style region (`root`, `input`, `call_out`, `group_label`)
        region: &'static str,
        /// Field within the region
        field: &'static str,
        /// Value as written
        value: String,
        /// Underlying parse failure
        source: ColorParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = ConfigError::DuplicateKey("apple".to_string());
        assert_eq!(err.to_string(), "duplicate option key: apple");
    }

    #[test]
    fn test_empty_key_display() {
        let err = ConfigError::EmptyKey {
            text: "Apple".to_string(),
        };
        assert!(err.to_string().contains("\"Apple\""));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_invalid_color_display_and_source() {
        let err = ConfigError::InvalidColor {
            region: "input",
            field: "background",
            value: "#12".to_string(),
            source: ColorParseError::InvalidLength,
        };
        let msg = err.to_string();
        assert!(msg.contains("input.background"));
        assert!(msg.contains("\"#12\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
