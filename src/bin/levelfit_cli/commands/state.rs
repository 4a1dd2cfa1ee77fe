// ABOUTME: levelfit-cli commands that read a progression document and print the result
// ABOUTME: Workout and preset accrual, progress display, and fresh documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use levelfit::document::ProgressionDocument;
use levelfit::errors::AppResult;
use levelfit::intake::{self, ExerciseInput};
use levelfit::models::ProgressionState;
use levelfit::{ProgressionEngine, WorkoutContributions, WorkoutPreset};
use tracing::info;

use crate::helpers::display::{print_document, print_progress_json, print_progress_table};
use crate::helpers::state_file::{load_state, read_json_file};

/// Apply `--add` assignments, then any exercises file, and print the document
pub fn workout(
    engine: &ProgressionEngine,
    state_path: Option<&Path>,
    assignments: &[String],
    exercises_path: Option<&Path>,
) -> AppResult<()> {
    let start = load_state(engine, state_path)?;

    let mut contributions = WorkoutContributions::new();
    for assignment in assignments {
        let (muscle, amount) = intake::parse_assignment(assignment)?;
        contributions.insert(muscle, intake::validate_amount(muscle.as_str(), amount)?);
    }
    let mut state = engine.add_workout_xp(&start, &contributions);

    if let Some(path) = exercises_path {
        let inputs: Vec<ExerciseInput> = read_json_file(path)?;
        let scored = intake::contributions_from_inputs(inputs)?;
        state = engine.add_workout_xp(&state, &scored);
    }

    report_level_ups(&start, &state);
    print_document(&ProgressionDocument::from_state(engine, &state).touch())
}

/// Apply a preset `times` times and print the document
pub fn preset(
    engine: &ProgressionEngine,
    name: &str,
    state_path: Option<&Path>,
    times: u32,
) -> AppResult<()> {
    let preset: WorkoutPreset = name.parse()?;
    let contributions: WorkoutContributions = preset.contributions();
    let start = load_state(engine, state_path)?;

    let state = (0..times).fold(start, |state, _| {
        engine.add_workout_xp(&state, &contributions)
    });

    info!(
        preset = %preset,
        times,
        session_xp = contributions.total(),
        "Applied workout preset"
    );
    report_level_ups(&start, &state);
    print_document(&ProgressionDocument::from_state(engine, &state).touch())
}

/// Print progress for the stored document
pub fn progress(engine: &ProgressionEngine, state_path: Option<&Path>, json: bool) -> AppResult<()> {
    let state = load_state(engine, state_path)?;
    let overall = engine.level_progress(state.overall());
    let muscles = engine.muscle_progress(&state);

    if json {
        print_progress_json(&overall, &muscles)
    } else {
        print_progress_table(&overall, &muscles);
        Ok(())
    }
}

/// Print a fresh document
pub fn reset(engine: &ProgressionEngine) -> AppResult<()> {
    let state = ProgressionEngine::reset();
    print_document(&ProgressionDocument::from_state(engine, &state).touch())
}

fn report_level_ups(before: &ProgressionState, after: &ProgressionState) {
    if after.overall().level > before.overall().level {
        info!(
            from = before.overall().level,
            to = after.overall().level,
            "Overall level up"
        );
    }
    for ((muscle, old), (_, new)) in before.muscles().iter().zip(after.muscles().iter()) {
        if new.level > old.level {
            info!(muscle = %muscle, from = old.level, to = new.level, "Muscle level up");
        }
    }
}
