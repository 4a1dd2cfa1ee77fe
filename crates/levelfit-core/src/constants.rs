// ABOUTME: Constants for the progression engine organized by domain
// ABOUTME: Default curve parameters, exercise XP factors, and rank tier thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Formula factors live here so the
//! algorithms read as formulas and the numbers stay in one place.

/// Level and XP curve defaults
pub mod progression {
    /// XP scale of the threshold curve
    pub const DEFAULT_BASE_XP: f64 = 500.0;
    /// Growth factor of the exponential and linear curves
    pub const DEFAULT_MULTIPLIER: f64 = 1.8;
    /// Level ceiling for the overall character track
    pub const DEFAULT_MAX_LEVEL: u32 = 50;
    /// Every track starts here
    pub const INITIAL_LEVEL: u32 = 1;
    /// Share of muscle XP that flows into overall XP, as a fraction (3/10 = 30%)
    pub const OVERALL_SHARE_NUMERATOR: u64 = 3;
    /// Denominator of the overall XP share
    pub const OVERALL_SHARE_DENOMINATOR: u64 = 10;
}

/// Per-exercise XP formula factors
pub mod exercise_xp {
    /// Hard cap on the XP one logged exercise can award
    pub const MAX_XP_PER_EXERCISE: u64 = 200;
    /// Each intensity point adds 10% to the base award
    pub const INTENSITY_STEP: f64 = 0.1;

    /// Strength: XP per kg lifted
    pub const STRENGTH_WEIGHT_FACTOR: f64 = 0.1;
    /// Strength: XP per rep
    pub const STRENGTH_REP_FACTOR: f64 = 2.0;
    /// Strength: XP per set
    pub const STRENGTH_SET_FACTOR: f64 = 5.0;

    /// Hypertrophy: XP per kg lifted
    pub const HYPERTROPHY_WEIGHT_FACTOR: f64 = 0.05;
    /// Hypertrophy: XP per rep
    pub const HYPERTROPHY_REP_FACTOR: f64 = 3.0;
    /// Hypertrophy: XP per set
    pub const HYPERTROPHY_SET_FACTOR: f64 = 8.0;

    /// Endurance: XP per kg lifted
    pub const ENDURANCE_WEIGHT_FACTOR: f64 = 0.02;
    /// Endurance: XP per rep
    pub const ENDURANCE_REP_FACTOR: f64 = 4.0;
    /// Endurance: XP per set
    pub const ENDURANCE_SET_FACTOR: f64 = 10.0;
}

/// Minimum levels for each rank tier
pub mod ranks {
    /// Advanced from level 5
    pub const ADVANCED_MIN_LEVEL: u32 = 5;
    /// Rare from level 10
    pub const RARE_MIN_LEVEL: u32 = 10;
    /// Epic from level 15
    pub const EPIC_MIN_LEVEL: u32 = 15;
    /// Legendary from level 20
    pub const LEGENDARY_MIN_LEVEL: u32 = 20;
}

/// Progress display bounds
pub mod progress {
    /// Lower bound of a progress percentage
    pub const MIN_PERCENTAGE: f64 = 0.0;
    /// Upper bound of a progress percentage
    pub const MAX_PERCENTAGE: f64 = 100.0;
}
