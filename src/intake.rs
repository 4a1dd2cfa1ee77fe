// ABOUTME: Workout intake validation turning raw client input into engine contributions
// ABOUTME: Rejects unknown muscles and negative or non-finite XP before the engine sees them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout intake
//!
//! The engine works on whole, non-negative XP amounts keyed by
//! [`MuscleGroup`]. Clients send string keys and JSON numbers; everything in
//! this module sits between the two and is the only place raw amounts are
//! checked.

use levelfit_core::errors::{AppError, AppResult};
use levelfit_core::models::{ExerciseType, MuscleGroup};
use levelfit_progression::{ExerciseLog, WorkoutContributions};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Convert a raw amount into whole XP
///
/// # Errors
///
/// Returns an error if `amount` is NaN, infinite, or negative
pub fn validate_amount(field: &str, amount: f64) -> AppResult<u64> {
    if !amount.is_finite() {
        warn!(field, amount, "Rejected non-finite XP amount");
        return Err(AppError::invalid_input(format!(
            "XP amount for '{field}' must be a finite number"
        ))
        .with_field(field));
    }
    if amount < 0.0 {
        warn!(field, amount, "Rejected negative XP amount");
        return Err(AppError::negative_xp(field, amount));
    }
    Ok(amount.floor() as u64)
}

/// Build contributions from `(muscle, amount)` pairs in client order
///
/// Muscle keys are matched case-insensitively. Fractional amounts are
/// floored. A muscle listed twice keeps its first position and its last
/// amount.
///
/// # Errors
///
/// Returns an error on the first unknown muscle key or invalid amount; no
/// partial result is produced
pub fn parse_contributions<I, K>(raw: I) -> AppResult<WorkoutContributions>
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let mut contributions = WorkoutContributions::new();
    for (key, amount) in raw {
        let key = key.as_ref();
        let muscle: MuscleGroup = key.parse().inspect_err(|_| {
            warn!(muscle = key, "Rejected unknown muscle group");
        })?;
        let xp = validate_amount(muscle.as_str(), amount)?;
        contributions.insert(muscle, xp);
    }

    debug!(
        muscles = contributions.len(),
        total_xp = contributions.total(),
        "Parsed workout contributions"
    );
    Ok(contributions)
}

/// Parse a `muscle=amount` assignment such as `chest=77`
///
/// # Errors
///
/// Returns an error if the `=` separator is missing, the amount is not a
/// number, or the muscle is unknown
pub fn parse_assignment(input: &str) -> AppResult<(MuscleGroup, f64)> {
    let (key, value) = input.split_once('=').ok_or_else(|| {
        AppError::invalid_format(format!(
            "Expected muscle=amount (e.g. chest=77), got '{input}'"
        ))
    })?;

    let muscle: MuscleGroup = key.parse()?;
    let amount: f64 = value.trim().parse().map_err(|_| {
        AppError::invalid_format(format!("Invalid XP amount '{}'", value.trim()))
            .with_field(muscle.as_str())
    })?;

    Ok((muscle, amount))
}

/// One exercise as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    /// Muscle group key
    pub muscle: String,
    /// Exercise type key (strength, hypertrophy, endurance)
    pub exercise_type: String,
    /// Effort on a 0-10 scale
    pub intensity: u8,
    /// Load in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
}

impl ExerciseInput {
    /// Validate into an [`ExerciseLog`]
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown muscle or exercise type, or a weight
    /// that is negative or not finite
    pub fn into_log(self) -> AppResult<ExerciseLog> {
        let muscle: MuscleGroup = self.muscle.parse()?;
        let exercise_type: ExerciseType = self.exercise_type.parse()?;
        if !self.weight.is_finite() || self.weight < 0.0 {
            warn!(weight = self.weight, "Rejected exercise weight");
            return Err(AppError::out_of_range(
                "weight",
                "Weight must be a non-negative finite number",
            ));
        }

        Ok(ExerciseLog {
            muscle,
            exercise_type,
            intensity: self.intensity,
            weight: self.weight,
            reps: self.reps,
            sets: self.sets,
        })
    }
}

/// Validate a list of exercises and sum their XP per muscle
///
/// # Errors
///
/// Returns the first validation error
pub fn contributions_from_inputs(inputs: Vec<ExerciseInput>) -> AppResult<WorkoutContributions> {
    let logs = inputs
        .into_iter()
        .map(ExerciseInput::into_log)
        .collect::<AppResult<Vec<_>>>()?;
    Ok(WorkoutContributions::from_exercises(&logs))
}
