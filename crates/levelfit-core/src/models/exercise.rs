// ABOUTME: Exercise type enumeration used by the per-exercise XP formula
// ABOUTME: Strength, hypertrophy and endurance training styles with parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Training style of a logged exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Heavy load, low reps
    Strength,
    /// Moderate load, moderate reps
    Hypertrophy,
    /// Light load, high reps
    Endurance,
}

impl ExerciseType {
    /// Lowercase key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "endurance" => Ok(Self::Endurance),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise type '{other}'. Valid options: strength, hypertrophy, endurance"
            ))
            .with_field("exercise_type")),
        }
    }
}
