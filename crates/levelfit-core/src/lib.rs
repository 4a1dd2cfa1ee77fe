// ABOUTME: Core types and constants for the LevelFit progression platform
// ABOUTME: Foundation crate with error handling, muscle/level models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LevelFit Core
//!
//! Foundation crate providing shared types and constants for the LevelFit
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Progression defaults, exercise XP factors, rank thresholds
//! - **models**: Muscle groups, level state, progression state, exercise types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MuscleGroup`, `LevelState`, `ProgressionState`, `ExerciseType`)
pub mod models;
