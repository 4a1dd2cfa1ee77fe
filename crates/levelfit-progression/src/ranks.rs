// ABOUTME: Rank tiers awarded by level for overall and per-muscle tracks
// ABOUTME: Beginner through legendary with fixed level boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use levelfit_core::constants::ranks::{
    ADVANCED_MIN_LEVEL, EPIC_MIN_LEVEL, LEGENDARY_MIN_LEVEL, RARE_MIN_LEVEL,
};
use serde::{Deserialize, Serialize};

/// Title shown next to a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    /// Levels 1-4
    Beginner,
    /// Levels 5-9
    Advanced,
    /// Levels 10-14
    Rare,
    /// Levels 15-19
    Epic,
    /// Level 20 and above
    Legendary,
}

impl RankTier {
    /// Tier for a level
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        if level >= LEGENDARY_MIN_LEVEL {
            Self::Legendary
        } else if level >= EPIC_MIN_LEVEL {
            Self::Epic
        } else if level >= RARE_MIN_LEVEL {
            Self::Rare
        } else if level >= ADVANCED_MIN_LEVEL {
            Self::Advanced
        } else {
            Self::Beginner
        }
    }

    /// Display title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Advanced => "ADVANCED",
            Self::Rare => "RARE",
            Self::Epic => "EPIC",
            Self::Legendary => "LEGENDARY",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
