// ABOUTME: Level and progression state value types for overall and per-muscle tracks
// ABOUTME: Immutable-in, new-value-out containers consumed and produced by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::MuscleGroup;
use crate::constants::progression::INITIAL_LEVEL;
use crate::errors::AppError;

/// Current standing of one track (the overall character or one muscle group)
///
/// Deserialization rejects level 0 instead of lifting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelStateRepr")]
pub struct LevelState {
    /// Discrete tier, always at least 1
    pub level: u32,
    /// Accumulated XP relative to the current level
    pub xp: u64,
}

impl LevelState {
    /// Level 1 with no XP
    pub const INITIAL: Self = Self {
        level: INITIAL_LEVEL,
        xp: 0,
    };

    /// Build a level state, lifting a zero level to the initial level
    #[must_use]
    pub const fn new(level: u32, xp: u64) -> Self {
        let level = if level < INITIAL_LEVEL {
            INITIAL_LEVEL
        } else {
            level
        };
        Self { level, xp }
    }
}

impl Default for LevelState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Unchecked wire shape of [`LevelState`]
#[derive(Deserialize)]
struct LevelStateRepr {
    level: u32,
    xp: u64,
}

impl TryFrom<LevelStateRepr> for LevelState {
    type Error = AppError;

    fn try_from(repr: LevelStateRepr) -> Result<Self, Self::Error> {
        if repr.level < INITIAL_LEVEL {
            return Err(AppError::out_of_range(
                "level",
                format!("Level must be at least {INITIAL_LEVEL}, got {}", repr.level),
            ));
        }
        Ok(Self {
            level: repr.level,
            xp: repr.xp,
        })
    }
}

/// Level state for each of the seven muscle groups
///
/// Every key is always present. Updates produce a new table through
/// [`MuscleStats::with`] instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "MuscleStatsRepr", into = "MuscleStatsRepr")]
pub struct MuscleStats {
    tracks: [LevelState; 7],
}

impl MuscleStats {
    /// Every muscle at the initial level
    pub const INITIAL: Self = Self {
        tracks: [LevelState::INITIAL; 7],
    };

    /// Level state of one muscle
    #[must_use]
    pub const fn get(&self, muscle: MuscleGroup) -> LevelState {
        self.tracks[muscle.index()]
    }

    /// Copy of this table with one muscle replaced
    #[must_use]
    pub fn with(mut self, muscle: MuscleGroup, state: LevelState) -> Self {
        self.tracks[muscle.index()] = state;
        self
    }

    /// Muscles and their states in [`MuscleGroup::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, LevelState)> + '_ {
        MuscleGroup::ALL
            .into_iter()
            .map(|muscle| (muscle, self.get(muscle)))
    }
}

/// Wire shape of [`MuscleStats`]: one named field per muscle
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct MuscleStatsRepr {
    #[serde(default)]
    chest: LevelState,
    #[serde(default)]
    back: LevelState,
    #[serde(default)]
    shoulders: LevelState,
    #[serde(default)]
    biceps: LevelState,
    #[serde(default)]
    triceps: LevelState,
    #[serde(default)]
    legs: LevelState,
    #[serde(default)]
    core: LevelState,
}

impl From<MuscleStatsRepr> for MuscleStats {
    fn from(repr: MuscleStatsRepr) -> Self {
        Self {
            tracks: [
                repr.chest,
                repr.back,
                repr.shoulders,
                repr.biceps,
                repr.triceps,
                repr.legs,
                repr.core,
            ],
        }
    }
}

impl From<MuscleStats> for MuscleStatsRepr {
    fn from(stats: MuscleStats) -> Self {
        Self {
            chest: stats.get(MuscleGroup::Chest),
            back: stats.get(MuscleGroup::Back),
            shoulders: stats.get(MuscleGroup::Shoulders),
            biceps: stats.get(MuscleGroup::Biceps),
            triceps: stats.get(MuscleGroup::Triceps),
            legs: stats.get(MuscleGroup::Legs),
            core: stats.get(MuscleGroup::Core),
        }
    }
}

/// Full progression snapshot: the unit handed to persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProgressionState {
    #[serde(default)]
    overall: LevelState,
    #[serde(default)]
    muscles: MuscleStats,
}

impl ProgressionState {
    /// Canonical initial state: every track at level 1 with no XP
    pub const INITIAL: Self = Self {
        overall: LevelState::INITIAL,
        muscles: MuscleStats::INITIAL,
    };

    /// Assemble a state from its parts
    #[must_use]
    pub const fn new(overall: LevelState, muscles: MuscleStats) -> Self {
        Self { overall, muscles }
    }

    /// Overall character track
    #[must_use]
    pub const fn overall(&self) -> LevelState {
        self.overall
    }

    /// One muscle track
    #[must_use]
    pub const fn muscle(&self, muscle: MuscleGroup) -> LevelState {
        self.muscles.get(muscle)
    }

    /// All muscle tracks
    #[must_use]
    pub const fn muscles(&self) -> &MuscleStats {
        &self.muscles
    }

    /// Copy of this state with the overall track replaced
    #[must_use]
    pub fn with_overall(mut self, overall: LevelState) -> Self {
        self.overall = overall;
        self
    }

    /// Copy of this state with one muscle track replaced
    #[must_use]
    pub fn with_muscle(mut self, muscle: MuscleGroup, state: LevelState) -> Self {
        self.muscles = self.muscles.with(muscle, state);
        self
    }
}
