// ABOUTME: Progression configuration: threshold curve parameters and level ceiling
// ABOUTME: Defaults, partial overrides, environment overrides, validation, global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Configuration
//!
//! Immutable for the lifetime of an engine. The engine never validates the
//! config it is given; [`ProgressionConfig::load`] does, so callers that go
//! through it cannot produce zero-width or decreasing thresholds.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use levelfit_core::constants::progression::{
    DEFAULT_BASE_XP, DEFAULT_MAX_LEVEL, DEFAULT_MULTIPLIER,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ConfigError;
use crate::algorithms::DifficultyCurve;

/// Environment variable overriding `base_xp`
pub const ENV_BASE_XP: &str = "LEVELFIT_BASE_XP";
/// Environment variable overriding `multiplier`
pub const ENV_MULTIPLIER: &str = "LEVELFIT_MULTIPLIER";
/// Environment variable overriding `max_level`
pub const ENV_MAX_LEVEL: &str = "LEVELFIT_MAX_LEVEL";
/// Environment variable overriding `difficulty_curve`
pub const ENV_DIFFICULTY_CURVE: &str = "LEVELFIT_DIFFICULTY_CURVE";

/// Threshold curve parameters and the overall level ceiling
///
/// Deserialization fills any missing field from the defaults, so a partial
/// document such as `{"max_level": 30}` overrides only what it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// XP scale of the threshold curve
    pub base_xp: f64,
    /// Growth factor for the exponential and linear curves
    pub multiplier: f64,
    /// Ceiling for the overall track (muscle tracks are uncapped)
    pub max_level: u32,
    /// Shape of the threshold curve
    pub difficulty_curve: DifficultyCurve,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            base_xp: DEFAULT_BASE_XP,
            multiplier: DEFAULT_MULTIPLIER,
            max_level: DEFAULT_MAX_LEVEL,
            difficulty_curve: DifficultyCurve::Exponential,
        }
    }
}

/// Global configuration singleton
static PROGRESSION_CONFIG: OnceLock<ProgressionConfig> = OnceLock::new();

impl ProgressionConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        PROGRESSION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load progression config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Cumulative XP required to reach `level`
    #[must_use]
    pub fn xp_for_level(&self, level: u32) -> u64 {
        self.difficulty_curve
            .xp_for_level(level, self.base_xp, self.multiplier)
    }

    /// Cumulative XP required to reach the level after `level`
    #[must_use]
    pub fn next_level_xp(&self, level: u32) -> u64 {
        self.xp_for_level(level.saturating_add(1))
    }

    /// Check that the parameters yield increasing, non-degenerate thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if `base_xp` is not a positive finite number, if
    /// `multiplier` is not above 1 for a curve that uses it, or if
    /// `max_level` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_xp.is_finite() || self.base_xp <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "base_xp must be a positive finite number",
            ));
        }

        if self.difficulty_curve.uses_multiplier()
            && (!self.multiplier.is_finite() || self.multiplier <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "multiplier must be greater than 1 for exponential and linear curves",
            ));
        }

        if self.max_level == 0 {
            return Err(ConfigError::ValueOutOfRange("max_level must be at least 1"));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(base_xp) = env_override(ENV_BASE_XP)? {
            self.base_xp = base_xp;
        }
        if let Some(multiplier) = env_override(ENV_MULTIPLIER)? {
            self.multiplier = multiplier;
        }
        if let Some(max_level) = env_override(ENV_MAX_LEVEL)? {
            self.max_level = max_level;
        }
        if let Some(curve) = env_override(ENV_DIFFICULTY_CURVE)? {
            self.difficulty_curve = curve;
        }

        Ok(self)
    }
}

/// Parse `var` when it is set; unset or non-unicode values leave the default
fn env_override<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    env::var(var).ok().map_or(Ok(None), |value| {
        value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse { var, value })
    })
}
