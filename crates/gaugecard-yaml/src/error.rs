//! Error types for card manifest parsing.

use gaugecard_core::ConfigError;
use std::fmt;

/// Error type for manifest parsing.
#[derive(Debug)]
pub enum ParseError {
    /// YAML parsing error
    Yaml(serde_yaml::Error),
    /// JSON parsing error
    Json(serde_json::Error),
    /// Card-level configuration validation error
    Config(ConfigError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Config(ConfigError::NoItems);
        assert_eq!(
            err.to_string(),
            "Configuration error: card configuration needs at least one item"
        );

        let yaml_err: serde_yaml::Error =
            serde_yaml::from_str::<serde_yaml::Value>("{{").unwrap_err();
        let err = ParseError::Yaml(yaml_err);
        assert!(err.to_string().starts_with("YAML error: "));
    }

    #[test]
    fn test_parse_error_source() {
        use std::error::Error;
        let err = ParseError::Config(ConfigError::NoItems);
        assert!(err.source().is_some());
    }
}
