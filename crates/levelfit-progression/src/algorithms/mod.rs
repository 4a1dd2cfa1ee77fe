// ABOUTME: Algorithm layer for progression calculations with enum-based dispatch
// ABOUTME: Provides difficulty curves for level thresholds and the per-exercise XP formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Threshold curves are an enum, not a string or a set of booleans, so the
//! compiler checks every curve is handled wherever thresholds are computed.
//!
//! # Example
//!
//! ```rust
//! use levelfit_progression::algorithms::DifficultyCurve;
//!
//! let curve = DifficultyCurve::Exponential;
//! assert_eq!(curve.xp_for_level(2, 500.0, 1.8), 900);
//! ```

/// Threshold curves mapping a level to its cumulative XP requirement
pub mod difficulty_curve;
/// XP awarded for a single logged exercise
pub mod exercise_xp;

pub use difficulty_curve::DifficultyCurve;
pub use exercise_xp::calculate_exercise_xp;
