// ABOUTME: Workout intake types: logged exercises and per-muscle XP contributions
// ABOUTME: Ordered partial mapping from muscle group to XP consumed by the batch accrual
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use levelfit_core::models::{ExerciseType, MuscleGroup};
use serde::{Deserialize, Serialize};

use crate::algorithms::calculate_exercise_xp;

/// One logged exercise targeting a single muscle group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Muscle group credited with the XP
    pub muscle: MuscleGroup,
    /// Training style
    pub exercise_type: ExerciseType,
    /// Effort on a small integer scale (typically 1-10)
    pub intensity: u8,
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
}

impl ExerciseLog {
    /// XP this exercise awards
    #[must_use]
    pub fn xp(&self) -> u64 {
        calculate_exercise_xp(
            self.exercise_type,
            self.intensity,
            self.weight,
            self.reps,
            self.sets,
        )
    }
}

/// XP earned per muscle group in one session
///
/// Only trained muscles are present. Entries keep the order in which they were
/// first inserted; inserting a muscle again replaces its amount in place, so
/// each muscle appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutContributions {
    entries: Vec<(MuscleGroup, u64)>,
}

impl WorkoutContributions {
    /// Empty set of contributions
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the amount for `muscle`, replacing any earlier amount
    pub fn insert(&mut self, muscle: MuscleGroup, amount: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|(m, _)| *m == muscle) {
            entry.1 = amount;
        } else {
            self.entries.push((muscle, amount));
        }
    }

    /// Builder form of [`WorkoutContributions::insert`]
    #[must_use]
    pub fn with(mut self, muscle: MuscleGroup, amount: u64) -> Self {
        self.insert(muscle, amount);
        self
    }

    /// Amount recorded for `muscle`
    #[must_use]
    pub fn get(&self, muscle: MuscleGroup) -> Option<u64> {
        self.entries
            .iter()
            .find(|(m, _)| *m == muscle)
            .map(|(_, amount)| *amount)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of muscles present
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no muscle is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all amounts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |total, (_, amount)| total.saturating_add(*amount))
    }

    /// Contributions from a list of logged exercises
    ///
    /// Exercises for the same muscle are summed; muscles keep the order in
    /// which they first appear.
    #[must_use]
    pub fn from_exercises(exercises: &[ExerciseLog]) -> Self {
        let mut contributions = Self::new();
        for exercise in exercises {
            let earned = exercise.xp();
            let current = contributions.get(exercise.muscle).unwrap_or(0);
            contributions.insert(exercise.muscle, current.saturating_add(earned));
        }
        contributions
    }
}

impl FromIterator<(MuscleGroup, u64)> for WorkoutContributions {
    fn from_iter<I: IntoIterator<Item = (MuscleGroup, u64)>>(iter: I) -> Self {
        let mut contributions = Self::new();
        for (muscle, amount) in iter {
            contributions.insert(muscle, amount);
        }
        contributions
    }
}
