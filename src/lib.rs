// ABOUTME: Main library entry point for the LevelFit progression platform
// ABOUTME: Application layer over the progression engine: config, logging, intake, documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LevelFit
//!
//! Character-style levels for strength training. Workouts award XP to the
//! muscle groups they train; a share of every muscle award also feeds an
//! overall character level.
//!
//! ## Architecture
//!
//! - **`levelfit-core`**: error types, muscle and level models, constants
//! - **`levelfit-progression`**: the pure engine (thresholds, accrual, progress)
//! - **this crate**: environment configuration, structured logging, workout
//!   intake validation, and the persisted progression document
//!
//! ## Example Usage
//!
//! ```rust
//! use levelfit::intake::parse_contributions;
//! use levelfit::ProgressionEngine;
//!
//! let engine = ProgressionEngine::default();
//! let contributions = parse_contributions([("chest", 77.0), ("triceps", 60.0)])?;
//! let state = engine.add_workout_xp(&ProgressionEngine::reset(), &contributions);
//!
//! assert_eq!(state.overall().xp, 41);
//! # Ok::<(), levelfit::errors::AppError>(())
//! ```

/// Application constants
pub mod constants;

/// Environment-driven application configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Validation of raw workout input into engine contributions
pub mod intake;

/// Persisted progression document codec
pub mod document;

pub use levelfit_core::errors;
pub use levelfit_core::models;
pub use levelfit_progression::{
    calculate_exercise_xp, DifficultyCurve, ExerciseLog, LevelProgress, MuscleProgress,
    ProgressionConfig, ProgressionEngine, RankTier, WorkoutContributions, WorkoutPreset,
};
