// ABOUTME: Canned workouts for exercising the progression engine end to end
// ABOUTME: Fixed exercise lists per preset, converted into per-muscle contributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use levelfit_core::errors::AppError;
use levelfit_core::models::{ExerciseType, MuscleGroup};
use serde::{Deserialize, Serialize};

use crate::workout::{ExerciseLog, WorkoutContributions};

/// Named workout with a fixed exercise list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutPreset {
    /// Push day: chest and triceps
    ChestTriceps,
    /// Pull day: back and biceps
    BackBiceps,
    /// Legs with a core finisher
    Legs,
    /// Shoulder isolation
    Shoulders,
    /// One exercise for every muscle group
    FullBody,
}

const fn exercise(
    muscle: MuscleGroup,
    exercise_type: ExerciseType,
    intensity: u8,
    weight: f64,
    reps: u32,
    sets: u32,
) -> ExerciseLog {
    ExerciseLog {
        muscle,
        exercise_type,
        intensity,
        weight,
        reps,
        sets,
    }
}

const CHEST_TRICEPS: [ExerciseLog; 2] = [
    exercise(MuscleGroup::Chest, ExerciseType::Hypertrophy, 8, 80.0, 10, 3),
    exercise(MuscleGroup::Triceps, ExerciseType::Hypertrophy, 7, 30.0, 12, 3),
];

const BACK_BICEPS: [ExerciseLog; 2] = [
    exercise(MuscleGroup::Back, ExerciseType::Strength, 9, 100.0, 8, 4),
    exercise(MuscleGroup::Biceps, ExerciseType::Hypertrophy, 7, 25.0, 12, 3),
];

const LEGS: [ExerciseLog; 2] = [
    exercise(MuscleGroup::Legs, ExerciseType::Strength, 9, 120.0, 6, 4),
    exercise(MuscleGroup::Core, ExerciseType::Endurance, 6, 0.0, 15, 3),
];

const SHOULDERS: [ExerciseLog; 1] = [exercise(
    MuscleGroup::Shoulders,
    ExerciseType::Hypertrophy,
    8,
    40.0,
    10,
    4,
)];

const FULL_BODY: [ExerciseLog; 7] = [
    exercise(MuscleGroup::Chest, ExerciseType::Hypertrophy, 7, 70.0, 10, 3),
    exercise(MuscleGroup::Back, ExerciseType::Strength, 8, 90.0, 8, 3),
    exercise(MuscleGroup::Shoulders, ExerciseType::Hypertrophy, 6, 35.0, 12, 3),
    exercise(MuscleGroup::Biceps, ExerciseType::Hypertrophy, 6, 20.0, 12, 3),
    exercise(MuscleGroup::Triceps, ExerciseType::Hypertrophy, 6, 25.0, 12, 3),
    exercise(MuscleGroup::Legs, ExerciseType::Strength, 8, 100.0, 8, 3),
    exercise(MuscleGroup::Core, ExerciseType::Endurance, 5, 0.0, 15, 3),
];

impl WorkoutPreset {
    /// Every preset
    pub const ALL: [Self; 5] = [
        Self::ChestTriceps,
        Self::BackBiceps,
        Self::Legs,
        Self::Shoulders,
        Self::FullBody,
    ];

    /// Snake-case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChestTriceps => "chest_triceps",
            Self::BackBiceps => "back_biceps",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::FullBody => "full_body",
        }
    }

    /// Exercises performed in this preset
    #[must_use]
    pub const fn exercises(self) -> &'static [ExerciseLog] {
        match self {
            Self::ChestTriceps => &CHEST_TRICEPS,
            Self::BackBiceps => &BACK_BICEPS,
            Self::Legs => &LEGS,
            Self::Shoulders => &SHOULDERS,
            Self::FullBody => &FULL_BODY,
        }
    }

    /// Per-muscle XP earned by completing this preset
    #[must_use]
    pub fn contributions(self) -> WorkoutContributions {
        WorkoutContributions::from_exercises(self.exercises())
    }
}

impl fmt::Display for WorkoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == key)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown workout preset '{s}'. Valid options: {}",
                    Self::ALL.map(Self::as_str).join(", ")
                ))
                .with_field("preset")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chest_triceps_contributions() {
        let contributions = WorkoutPreset::ChestTriceps.contributions();
        assert_eq!(contributions.get(MuscleGroup::Chest), Some(104));
        assert_eq!(contributions.get(MuscleGroup::Triceps), Some(104));
        assert_eq!(contributions.len(), 2);
    }

    #[test]
    fn test_legs_and_shoulders_contributions() {
        let legs = WorkoutPreset::Legs.contributions();
        assert_eq!(legs.get(MuscleGroup::Legs), Some(83));
        assert_eq!(legs.get(MuscleGroup::Core), Some(144));

        let shoulders = WorkoutPreset::Shoulders.contributions();
        assert_eq!(shoulders.get(MuscleGroup::Shoulders), Some(115));
    }

    #[test]
    fn test_full_body_trains_every_muscle() {
        let contributions = WorkoutPreset::FullBody.contributions();
        assert_eq!(contributions.len(), MuscleGroup::ALL.len());
        assert!(contributions.iter().all(|(_, amount)| amount > 0));
    }

    #[test]
    fn test_parse_accepts_dashes_and_underscores() {
        assert_eq!(
            "chest-triceps".parse::<WorkoutPreset>().unwrap(),
            WorkoutPreset::ChestTriceps
        );
        assert_eq!(
            "FULL_BODY".parse::<WorkoutPreset>().unwrap(),
            WorkoutPreset::FullBody
        );
        assert!("arms".parse::<WorkoutPreset>().is_err());
    }
}
