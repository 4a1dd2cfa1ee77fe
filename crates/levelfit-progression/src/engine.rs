// ABOUTME: Progression engine applying XP to overall and per-muscle level tracks
// ABOUTME: Single-step level-ups, muscle-to-overall cross-contribution, and workout batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! XP accrual
//!
//! Every operation here takes a state by value or reference and returns a new
//! one. A single call advances any track by at most one level; XP that would
//! satisfy further thresholds stays in the stored `xp` until a later call.

use levelfit_core::constants::progression::{OVERALL_SHARE_DENOMINATOR, OVERALL_SHARE_NUMERATOR};
use levelfit_core::models::{LevelState, MuscleGroup, ProgressionState};
use tracing::{debug, trace};

use crate::config::ProgressionConfig;
use crate::progress::{LevelProgress, MuscleProgress};
use crate::workout::WorkoutContributions;

/// Add `amount` to a track and advance it by at most one level
///
/// The track levels up when the new XP reaches the next threshold and the
/// current level is below `level_cap` (`None` means uncapped). On a level-up
/// the stored XP becomes `new_xp - xp_for_level(new_level)`, floored at 0.
/// Without a level-up the XP simply accumulates, including at the cap.
#[must_use]
pub fn single_step_level_up(
    state: LevelState,
    amount: u64,
    level_cap: Option<u32>,
    config: &ProgressionConfig,
) -> LevelState {
    let new_xp = state.xp.saturating_add(amount);

    let below_cap = match level_cap {
        Some(cap) => state.level < cap,
        None => state.level < u32::MAX,
    };

    if below_cap && new_xp >= config.next_level_xp(state.level) {
        let new_level = state.level + 1;
        let carried = new_xp.saturating_sub(config.xp_for_level(new_level));
        return LevelState::new(new_level, carried);
    }

    LevelState::new(state.level, new_xp)
}

/// Portion of a muscle award that flows into overall XP: `floor(amount x 0.3)`
///
/// Computed in integers so that amounts like 60 yield exactly 18.
///
/// # Example
///
/// ```rust
/// use levelfit_progression::overall_share;
///
/// assert_eq!(overall_share(77), 23);
/// assert_eq!(overall_share(1000), 300);
/// ```
#[must_use]
pub const fn overall_share(amount: u64) -> u64 {
    amount / OVERALL_SHARE_DENOMINATOR * OVERALL_SHARE_NUMERATOR
        + (amount % OVERALL_SHARE_DENOMINATOR) * OVERALL_SHARE_NUMERATOR
            / OVERALL_SHARE_DENOMINATOR
}

/// Level and XP calculations for one configuration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl ProgressionEngine {
    /// Engine for `config`
    ///
    /// The config is used as given. Run [`ProgressionConfig::validate`] first
    /// if it comes from an untrusted source.
    #[must_use]
    pub const fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Cumulative XP required to reach `level`
    #[must_use]
    pub fn xp_for_level(&self, level: u32) -> u64 {
        self.config.xp_for_level(level)
    }

    /// Cumulative XP required to reach the level after `level`
    #[must_use]
    pub fn next_level_xp(&self, level: u32) -> u64 {
        self.config.next_level_xp(level)
    }

    /// Add XP to the overall track, capped at `max_level`
    #[must_use]
    pub fn add_overall_xp(&self, overall: LevelState, amount: u64) -> LevelState {
        let updated =
            single_step_level_up(overall, amount, Some(self.config.max_level), &self.config);
        if updated.level > overall.level {
            debug!(
                from = overall.level,
                to = updated.level,
                carried_xp = updated.xp,
                "Overall level up"
            );
        }
        updated
    }

    /// Add XP to one muscle and feed 30% of the raw amount into overall XP
    ///
    /// The muscle track has no level ceiling. The overall share is applied
    /// even when it is zero.
    #[must_use]
    pub fn add_muscle_xp(
        &self,
        state: &ProgressionState,
        muscle: MuscleGroup,
        amount: u64,
    ) -> ProgressionState {
        trace!(muscle = muscle.as_str(), amount, "Muscle XP accrual");
        let current = state.muscle(muscle);
        let updated = single_step_level_up(current, amount, None, &self.config);
        if updated.level > current.level {
            debug!(
                muscle = muscle.as_str(),
                from = current.level,
                to = updated.level,
                carried_xp = updated.xp,
                "Muscle level up"
            );
        }

        let overall = self.add_overall_xp(state.overall(), overall_share(amount));

        state.with_muscle(muscle, updated).with_overall(overall)
    }

    /// Apply a session's contributions one muscle at a time, in order
    ///
    /// Zero amounts are skipped. Each entry is a separate
    /// [`ProgressionEngine::add_muscle_xp`] call, so every muscle and the
    /// overall track can advance at most once per entry.
    #[must_use]
    pub fn add_workout_xp(
        &self,
        state: &ProgressionState,
        contributions: &WorkoutContributions,
    ) -> ProgressionState {
        let result = contributions
            .iter()
            .filter(|(_, amount)| *amount > 0)
            .fold(*state, |acc, (muscle, amount)| {
                self.add_muscle_xp(&acc, muscle, amount)
            });

        debug!(
            muscles = contributions.len(),
            total_xp = contributions.total(),
            overall_level = result.overall().level,
            "Applied workout XP"
        );
        result
    }

    /// Progress through the current level
    #[must_use]
    pub fn level_progress(&self, state: LevelState) -> LevelProgress {
        LevelProgress::compute(state, &self.config)
    }

    /// Progress rows for every muscle group in canonical order
    #[must_use]
    pub fn muscle_progress(&self, state: &ProgressionState) -> Vec<MuscleProgress> {
        state
            .muscles()
            .iter()
            .map(|(muscle, track)| MuscleProgress::compute(muscle, track, &self.config))
            .collect()
    }

    /// XP still needed for `state` to reach its next level, 0 once reached
    #[must_use]
    pub fn xp_to_level_up(&self, state: LevelState) -> u64 {
        self.next_level_xp(state.level).saturating_sub(state.xp)
    }

    /// Starting state: every track at level 1 with 0 XP
    #[must_use]
    pub const fn reset() -> ProgressionState {
        ProgressionState::INITIAL
    }
}
