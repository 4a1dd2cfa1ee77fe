// ABOUTME: Progression engine crate converting workout activity into levels
// ABOUTME: Threshold curves, single-step level-ups, muscle/overall XP flow, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LevelFit Progression
//!
//! Synchronous, pure calculations over an explicit [`ProgressionState`]. Every
//! mutating operation takes a state value and returns a new one; nothing here
//! blocks, performs I/O, or keeps hidden state. Callers persist the returned
//! state and serialize concurrent updates for the same user.
//!
//! ## Modules
//!
//! - **config**: [`ProgressionConfig`] with environment overrides and validation
//! - **algorithms**: difficulty curves and the per-exercise XP formula
//! - **engine**: [`ProgressionEngine`] accrual operations
//! - **progress**: derived [`LevelProgress`] read surface
//! - **ranks**: rank tier titles by level
//! - **workout**: exercise logs and per-muscle workout contributions
//! - **presets**: canned workouts used by level-up drills
//!
//! [`ProgressionState`]: levelfit_core::models::ProgressionState

/// Progression configuration and validation
pub mod config;

/// Difficulty curves and exercise XP formula
pub mod algorithms;

/// XP accrual and level-up engine
pub mod engine;

/// Derived progress percentages
pub mod progress;

/// Rank tiers by level
pub mod ranks;

/// Exercise logs and workout contributions
pub mod workout;

/// Canned workouts
pub mod presets;

pub use algorithms::{calculate_exercise_xp, DifficultyCurve};
pub use config::{ConfigError, ProgressionConfig};
pub use engine::{overall_share, single_step_level_up, ProgressionEngine};
pub use progress::{LevelProgress, MuscleProgress};
pub use ranks::RankTier;
pub use workout::{ExerciseLog, WorkoutContributions};
pub use presets::WorkoutPreset;
