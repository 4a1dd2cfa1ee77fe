// ABOUTME: Difficulty curves mapping a level to the cumulative XP needed to reach it
// ABOUTME: Implements exponential, quadratic, and linear threshold growth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use levelfit_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// Threshold curve selection
///
/// Every curve returns 0 for level 1 (and below) and floors its result to a
/// whole XP amount. For a given level and parameter set the output is always
/// identical, so displayed thresholds stay consistent across sessions.
///
/// - `Exponential`: steep growth, rare level-ups at high levels
/// - `Quadratic`: accelerating growth independent of the multiplier
/// - `Linear`: constant step between consecutive thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyCurve {
    /// Formula: `floor(base_xp x multiplier^(level-1))`
    #[default]
    Exponential,

    /// Formula: `floor(base_xp x level^2)`
    ///
    /// The multiplier is ignored.
    Quadratic,

    /// Formula: `floor(base_xp x multiplier x (level-1))`
    Linear,
}

impl DifficultyCurve {
    /// Cumulative XP required to reach `level`
    ///
    /// Results beyond `u64::MAX` saturate, so extreme levels on an
    /// exponential curve stay ordered instead of wrapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use levelfit_progression::algorithms::DifficultyCurve;
    ///
    /// assert_eq!(DifficultyCurve::Quadratic.xp_for_level(3, 500.0, 1.8), 4500);
    /// assert_eq!(DifficultyCurve::Linear.xp_for_level(3, 500.0, 1.8), 1800);
    /// assert_eq!(DifficultyCurve::Exponential.xp_for_level(1, 500.0, 1.8), 0);
    /// ```
    #[must_use]
    pub fn xp_for_level(self, level: u32, base_xp: f64, multiplier: f64) -> u64 {
        if level <= 1 {
            return 0;
        }

        let steps = f64::from(level - 1);
        let raw = match self {
            Self::Exponential => base_xp * multiplier.powf(steps),
            Self::Quadratic => {
                let level = f64::from(level);
                base_xp * (level * level)
            }
            Self::Linear => base_xp * multiplier * steps,
        };

        // Float-to-int `as` saturates: NaN and negatives become 0, +inf becomes u64::MAX
        raw.floor() as u64
    }

    /// Whether the curve's shape depends on the multiplier
    #[must_use]
    pub const fn uses_multiplier(self) -> bool {
        matches!(self, Self::Exponential | Self::Linear)
    }

    /// Lowercase key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exponential => "exponential",
            Self::Quadratic => "quadratic",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for DifficultyCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyCurve {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exponential" => Ok(Self::Exponential),
            "quadratic" => Ok(Self::Quadratic),
            "linear" => Ok(Self::Linear),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty curve '{other}'. Valid options: exponential, quadratic, linear"
            ))
            .with_field("difficulty_curve")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [DifficultyCurve; 3] = [
        DifficultyCurve::Exponential,
        DifficultyCurve::Quadratic,
        DifficultyCurve::Linear,
    ];

    #[test]
    fn test_level_one_and_below_require_nothing() {
        for curve in CURVES {
            assert_eq!(curve.xp_for_level(0, 500.0, 1.8), 0);
            assert_eq!(curve.xp_for_level(1, 500.0, 1.8), 0);
        }
    }

    #[test]
    fn test_exponential_thresholds() {
        let curve = DifficultyCurve::Exponential;
        assert_eq!(curve.xp_for_level(2, 500.0, 1.8), 900);
        assert_eq!(curve.xp_for_level(3, 500.0, 1.8), 1620);
    }

    #[test]
    fn test_quadratic_ignores_multiplier() {
        let curve = DifficultyCurve::Quadratic;
        assert_eq!(curve.xp_for_level(2, 500.0, 1.8), 2000);
        assert_eq!(curve.xp_for_level(2, 500.0, 9.0), 2000);
    }

    #[test]
    fn test_linear_thresholds_step_evenly() {
        let curve = DifficultyCurve::Linear;
        let step = curve.xp_for_level(2, 500.0, 1.8);
        assert_eq!(step, 900);
        assert_eq!(curve.xp_for_level(5, 500.0, 1.8), 4 * step);
    }

    #[test]
    fn test_thresholds_strictly_increase_for_every_curve() {
        for curve in CURVES {
            for level in 1..60 {
                let current = curve.xp_for_level(level, 500.0, 1.8);
                let next = curve.xp_for_level(level + 1, 500.0, 1.8);
                assert!(
                    next > current,
                    "{curve} threshold for level {} ({next}) should exceed level {level} ({current})",
                    level + 1
                );
            }
        }
    }

    #[test]
    fn test_extreme_levels_saturate() {
        let curve = DifficultyCurve::Exponential;
        assert_eq!(curve.xp_for_level(u32::MAX, 500.0, 1.8), u64::MAX);
    }

    #[test]
    fn test_parse_curve_names() {
        assert_eq!(
            "Exponential".parse::<DifficultyCurve>().unwrap(),
            DifficultyCurve::Exponential
        );
        assert_eq!(
            "linear".parse::<DifficultyCurve>().unwrap(),
            DifficultyCurve::Linear
        );
        assert!("logarithmic".parse::<DifficultyCurve>().is_err());
    }
}
