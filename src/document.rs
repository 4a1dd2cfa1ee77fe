// ABOUTME: Persisted progression document mapping engine state to its stored JSON shape
// ABOUTME: camelCase level/xp/muscleStats/updatedAt with validation on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression document
//!
//! Stored shape:
//!
//! ```json
//! {
//!   "level": 3,
//!   "xp": 120,
//!   "muscleStats": {
//!     "chest": { "level": 2, "xp": 40, "nextLevelXp": 1620 }
//!   },
//!   "updatedAt": "2025-03-01T10:00:00Z"
//! }
//! ```
//!
//! `nextLevelXp` is written for readers of the raw document and ignored on
//! load; it is always recomputed from the active configuration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use levelfit_core::constants::progression::INITIAL_LEVEL;
use levelfit_core::errors::{AppError, AppResult};
use levelfit_core::models::{LevelState, MuscleGroup, MuscleStats, ProgressionState};
use levelfit_progression::ProgressionEngine;
use serde::{Deserialize, Serialize};
use tracing::warn;

const fn initial_level() -> u32 {
    INITIAL_LEVEL
}

/// Stored state of one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleStatsEntry {
    /// Current level
    #[serde(default = "initial_level")]
    pub level: u32,
    /// Stored XP
    #[serde(default)]
    pub xp: u64,
    /// Threshold of the next level at the time of writing
    #[serde(default)]
    pub next_level_xp: u64,
}

/// Progression snapshot as persisted per user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionDocument {
    /// Overall level
    #[serde(default = "initial_level")]
    pub level: u32,
    /// Overall XP
    #[serde(default)]
    pub xp: u64,
    /// Per-muscle state keyed by lowercase muscle name
    #[serde(default)]
    pub muscle_stats: BTreeMap<String, MuscleStatsEntry>,
    /// Time of the last write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ProgressionDocument {
    fn default() -> Self {
        Self {
            level: INITIAL_LEVEL,
            xp: 0,
            muscle_stats: BTreeMap::new(),
            updated_at: None,
        }
    }
}

impl ProgressionDocument {
    /// Snapshot `state`, filling `nextLevelXp` from `engine`
    #[must_use]
    pub fn from_state(engine: &ProgressionEngine, state: &ProgressionState) -> Self {
        let overall = state.overall();
        let muscle_stats = state
            .muscles()
            .iter()
            .map(|(muscle, track)| {
                let entry = MuscleStatsEntry {
                    level: track.level,
                    xp: track.xp,
                    next_level_xp: engine.next_level_xp(track.level),
                };
                (muscle.as_str().to_owned(), entry)
            })
            .collect();

        Self {
            level: overall.level,
            xp: overall.xp,
            muscle_stats,
            updated_at: None,
        }
    }

    /// Set the write timestamp
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Stamp the document with the current time
    #[must_use]
    pub fn touch(self) -> Self {
        self.with_updated_at(Utc::now())
    }

    /// Rebuild engine state from the document
    ///
    /// Muscles missing from `muscleStats` start at level 1 with no XP. The
    /// overall level must not exceed the engine's `max_level`; muscle levels
    /// have no ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error if any level is 0, the overall level is above
    /// `max_level`, or a `muscleStats` key is not a known muscle group
    pub fn into_state(self, engine: &ProgressionEngine) -> AppResult<ProgressionState> {
        let max_level = engine.config().max_level;
        let overall = checked_level_state("level", self.level, self.xp)?;
        if overall.level > max_level {
            warn!(level = overall.level, max_level, "Progression document exceeds level cap");
            return Err(AppError::out_of_range(
                "level",
                format!("Level must be at most {max_level}, got {}", overall.level),
            ));
        }

        let mut muscles = MuscleStats::INITIAL;
        for (key, entry) in self.muscle_stats {
            let muscle: MuscleGroup = key.parse().inspect_err(|_| {
                warn!(muscle = %key, "Progression document has unknown muscle key");
            })?;
            let field = format!("muscleStats.{muscle}.level");
            let track = checked_level_state(&field, entry.level, entry.xp)?;
            muscles = muscles.with(muscle, track);
        }

        Ok(ProgressionState::new(overall, muscles))
    }

    /// Parse a document from JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the document shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn checked_level_state(field: &str, level: u32, xp: u64) -> AppResult<LevelState> {
    if level < INITIAL_LEVEL {
        warn!(field, level, "Progression document has level below 1");
        return Err(AppError::out_of_range(
            field,
            format!("Level must be at least {INITIAL_LEVEL}, got {level}"),
        ));
    }
    Ok(LevelState::new(level, xp))
}
