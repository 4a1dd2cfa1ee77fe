// ABOUTME: Core data models for the LevelFit progression engine
// ABOUTME: Re-exports MuscleGroup, LevelState, ProgressionState and ExerciseType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The unit of persistence is [`ProgressionState`]: one overall [`LevelState`]
//! plus one per [`MuscleGroup`]. The muscle set is closed, so the per-muscle
//! table is a fixed-size structure rather than an open map.

mod exercise;
mod level;
mod muscle;

pub use exercise::ExerciseType;
pub use level::{LevelState, MuscleStats, ProgressionState};
pub use muscle::MuscleGroup;
