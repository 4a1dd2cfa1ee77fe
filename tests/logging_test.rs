// ABOUTME: Integration tests for structured logging setup
// ABOUTME: Subscriber installation and filter construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use levelfit::logging::{LogFormat, LoggingConfig};
use levelfit::models::MuscleGroup;
use levelfit::ProgressionEngine;

#[test]
fn test_subscriber_installs_once() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .with_level("trace");

    config.init().unwrap();
    // A second global subscriber is refused rather than replacing the first
    assert!(config.init().is_err());

    // Engine events flow through the installed subscriber without panicking
    let engine = ProgressionEngine::default();
    let state = engine.add_muscle_xp(&ProgressionEngine::reset(), MuscleGroup::Chest, 5_000);
    assert_eq!(state.muscle(MuscleGroup::Chest).level, 2);
}

#[test]
fn test_filter_pins_every_levelfit_crate() {
    let filter = LoggingConfig::default().with_level("warn").env_filter();
    let rendered = filter.to_string();
    for target in ["levelfit", "levelfit_core", "levelfit_progression"] {
        assert!(rendered.contains(&format!("{target}=warn")), "{rendered}");
    }
}
