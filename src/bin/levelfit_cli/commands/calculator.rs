// ABOUTME: Stateless levelfit-cli commands: threshold table and single-exercise scoring
// ABOUTME: Print engine calculations without touching any progression document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use levelfit::errors::AppResult;
use levelfit::models::ExerciseType;
use levelfit::{calculate_exercise_xp, ProgressionEngine};
use tracing::debug;

use crate::helpers::display::print_threshold_table;

/// Print the first `levels` thresholds
pub fn thresholds(engine: &ProgressionEngine, levels: u32) {
    let rows: Vec<(u32, u64)> = (1..=levels.max(1))
        .map(|level| (level, engine.xp_for_level(level)))
        .collect();
    print_threshold_table(engine.config().difficulty_curve.as_str(), &rows);
}

/// Print the XP one exercise awards
pub fn exercise_xp(
    exercise_type: &str,
    intensity: u8,
    weight: f64,
    reps: u32,
    sets: u32,
) -> AppResult<()> {
    let exercise_type: ExerciseType = exercise_type.parse()?;
    let xp = calculate_exercise_xp(exercise_type, intensity, weight, reps, sets);
    debug!(%exercise_type, intensity, weight, reps, sets, xp, "Scored exercise");
    println!("{xp}");
    Ok(())
}
