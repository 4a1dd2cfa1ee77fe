// ABOUTME: Errors raised while loading or validating a progression config
// ABOUTME: Curve parameter violations and unparsable LEVELFIT_* overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use levelfit_core::errors::AppError;
use thiserror::Error;

/// Why a [`ProgressionConfig`](super::ProgressionConfig) was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Curve parameter that would make thresholds flat or decreasing
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric parameter outside the values the engine accepts
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Environment override that does not parse as the expected type
    #[error("Invalid {var}: '{value}'")]
    Parse {
        /// Variable holding the bad value
        var: &'static str,
        /// Raw value as read from the environment
        value: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let app_error = Self::config_invalid(error.to_string());
        let app_error = match &error {
            ConfigError::Parse { var, .. } => app_error.with_field(*var),
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => app_error,
        };
        app_error.with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelfit_core::errors::ErrorCode;

    #[test]
    fn test_parse_error_names_the_variable() {
        let error = AppError::from(ConfigError::Parse {
            var: "LEVELFIT_MAX_LEVEL",
            value: "many".to_owned(),
        });
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert_eq!(error.context.field.as_deref(), Some("LEVELFIT_MAX_LEVEL"));
        assert!(error.message.contains("'many'"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_range_errors_have_no_field() {
        let error = AppError::from(ConfigError::InvalidRange("multiplier must exceed 1"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.context.field.is_none());
    }
}
