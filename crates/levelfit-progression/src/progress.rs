// ABOUTME: Derived progress read surface for overall and per-muscle tracks
// ABOUTME: Computes thresholds, remaining XP, and a clamped, NaN-free progress percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress derivation
//!
//! Values here are computed on demand for presentation and never written back
//! into a [`LevelState`].

use levelfit_core::constants::progress::{MAX_PERCENTAGE, MIN_PERCENTAGE};
use levelfit_core::models::{LevelState, MuscleGroup};
use serde::{Deserialize, Serialize};

use crate::config::ProgressionConfig;
use crate::ranks::RankTier;

/// Where a track stands relative to its next threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level
    pub current_level: u32,
    /// Stored XP
    pub current_xp: u64,
    /// Cumulative XP required for the next level
    pub next_level_xp: u64,
    /// XP still missing to reach `next_level_xp`, 0 once reached
    pub xp_to_next_level: u64,
    /// Percentage through the current level, within `[0, 100]`
    pub progress_percentage: f64,
}

impl LevelProgress {
    /// Derive progress for `state` under `config`
    ///
    /// `progress_percentage = clamp((xp - floor) / (next - floor) x 100, 0, 100)`
    /// where `floor` is the threshold of the current level. A zero-width
    /// level (`next == floor`) counts as complete.
    #[must_use]
    pub fn compute(state: LevelState, config: &ProgressionConfig) -> Self {
        let floor = config.xp_for_level(state.level);
        let next = config.next_level_xp(state.level);

        let progress_percentage = if next == floor {
            MAX_PERCENTAGE
        } else {
            let span = next as f64 - floor as f64;
            let into_level = state.xp as f64 - floor as f64;
            (into_level / span * 100.0).clamp(MIN_PERCENTAGE, MAX_PERCENTAGE)
        };

        Self {
            current_level: state.level,
            current_xp: state.xp,
            next_level_xp: next,
            xp_to_next_level: next.saturating_sub(state.xp),
            progress_percentage,
        }
    }
}

/// Progress row for one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleProgress {
    /// Muscle group
    pub muscle: MuscleGroup,
    /// Current level
    pub level: u32,
    /// Stored XP
    pub xp: u64,
    /// Cumulative XP required for the next level
    pub next_level_xp: u64,
    /// XP still missing, 0 once reached
    pub xp_to_next_level: u64,
    /// Percentage through the current level, within `[0, 100]`
    pub progress_percentage: f64,
    /// Rank title for the level
    pub rank: RankTier,
}

impl MuscleProgress {
    /// Derive the row for `muscle`
    #[must_use]
    pub fn compute(muscle: MuscleGroup, state: LevelState, config: &ProgressionConfig) -> Self {
        let progress = LevelProgress::compute(state, config);
        Self {
            muscle,
            level: progress.current_level,
            xp: progress.current_xp,
            next_level_xp: progress.next_level_xp,
            xp_to_next_level: progress.xp_to_next_level,
            progress_percentage: progress.progress_percentage,
            rank: RankTier::for_level(state.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::DifficultyCurve;

    #[test]
    fn test_halfway_through_first_level() {
        let config = ProgressionConfig::default();
        let progress = LevelProgress::compute(LevelState::new(1, 450), &config);

        assert_eq!(progress.next_level_xp, 900);
        assert_eq!(progress.xp_to_next_level, 450);
        assert!((progress.progress_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_is_clamped_above() {
        let config = ProgressionConfig::default();
        let progress = LevelProgress::compute(LevelState::new(1, 1_000_000), &config);

        assert!((progress.progress_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(progress.xp_to_next_level, 0);
    }

    #[test]
    fn test_percentage_is_clamped_below() {
        // Carried-over XP sits below the level-2 floor of 900
        let config = ProgressionConfig::default();
        let progress = LevelProgress::compute(LevelState::new(2, 100), &config);

        assert!(progress.progress_percentage.abs() < f64::EPSILON);
        assert_eq!(progress.next_level_xp, 1620);
    }

    #[test]
    fn test_zero_width_level_counts_as_complete() {
        let config = ProgressionConfig {
            base_xp: 0.0,
            difficulty_curve: DifficultyCurve::Linear,
            ..ProgressionConfig::default()
        };
        let progress = LevelProgress::compute(LevelState::new(3, 0), &config);

        assert!((progress.progress_percentage - 100.0).abs() < f64::EPSILON);
        assert!(progress.progress_percentage.is_finite());
    }

    #[test]
    fn test_percentage_bounded_for_any_xp() {
        let config = ProgressionConfig::default();
        for level in [1, 2, 10, 50] {
            for xp in [0, 1, 899, 900, 10_000, u64::MAX] {
                let pct = LevelProgress::compute(LevelState::new(level, xp), &config)
                    .progress_percentage;
                assert!((0.0..=100.0).contains(&pct), "level {level} xp {xp}: {pct}");
            }
        }
    }

    #[test]
    fn test_muscle_row_carries_rank() {
        let config = ProgressionConfig::default();
        let row = MuscleProgress::compute(MuscleGroup::Back, LevelState::new(12, 0), &config);
        assert_eq!(row.rank, RankTier::Rare);
        assert_eq!(row.muscle, MuscleGroup::Back);
    }
}
