// ABOUTME: Integration tests for the persisted progression document
// ABOUTME: camelCase shape, defaults for missing fields, validation, and recomputed thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use levelfit::document::ProgressionDocument;
use levelfit::errors::ErrorCode;
use levelfit::models::{LevelState, MuscleGroup, ProgressionState};
use levelfit::{ProgressionConfig, ProgressionEngine};
use serde_json::{json, Value};

#[test]
fn test_document_uses_camel_case_fields() {
    let engine = ProgressionEngine::default();
    let state = engine.add_muscle_xp(&ProgressionEngine::reset(), MuscleGroup::Chest, 77);
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();

    let document = ProgressionDocument::from_state(&engine, &state).with_updated_at(timestamp);
    let value: Value = serde_json::to_value(&document).unwrap();

    assert_eq!(value["level"], 1);
    assert_eq!(value["xp"], 23);
    assert_eq!(value["muscleStats"]["chest"]["xp"], 77);
    assert_eq!(value["muscleStats"]["chest"]["nextLevelXp"], 900);
    assert_eq!(value["muscleStats"]["core"]["level"], 1);
    assert_eq!(value["updatedAt"], "2025-03-01T10:00:00Z");
    assert_eq!(value["muscleStats"].as_object().unwrap().len(), 7);
}

#[test]
fn test_document_restores_state() {
    let engine = ProgressionEngine::default();
    let state = ProgressionState::INITIAL
        .with_overall(LevelState::new(4, 321))
        .with_muscle(MuscleGroup::Legs, LevelState::new(7, 12));

    let json = ProgressionDocument::from_state(&engine, &state)
        .to_json_pretty()
        .unwrap();
    let restored = ProgressionDocument::from_json(&json)
        .unwrap()
        .into_state(&engine)
        .unwrap();

    assert_eq!(restored, state);
}

#[test]
fn test_missing_fields_take_defaults() {
    let engine = ProgressionEngine::default();
    let document = ProgressionDocument::from_json(r#"{"xp": 40}"#).unwrap();
    assert!(document.updated_at.is_none());

    let state = document.into_state(&engine).unwrap();
    assert_eq!(state.overall(), LevelState::new(1, 40));
    assert_eq!(state.muscle(MuscleGroup::Back), LevelState::INITIAL);

    let partial = ProgressionDocument::from_json(
        r#"{"level": 3, "muscleStats": {"biceps": {"xp": 5}}}"#,
    )
    .unwrap()
    .into_state(&engine)
    .unwrap();
    assert_eq!(partial.overall(), LevelState::new(3, 0));
    assert_eq!(partial.muscle(MuscleGroup::Biceps), LevelState::new(1, 5));
}

#[test]
fn test_stale_next_level_xp_is_ignored() {
    let raw = json!({
        "level": 2,
        "xp": 10,
        "muscleStats": {
            "shoulders": { "level": 2, "xp": 100, "nextLevelXp": 12345 }
        }
    });
    let engine = ProgressionEngine::new(ProgressionConfig::default());
    let document: ProgressionDocument = serde_json::from_value(raw).unwrap();
    let state = document.into_state(&engine).unwrap();

    let rewritten = ProgressionDocument::from_state(&engine, &state);
    assert_eq!(rewritten.muscle_stats["shoulders"].next_level_xp, 1620);
}

#[test]
fn test_unknown_muscle_key_is_rejected() {
    let document =
        ProgressionDocument::from_json(r#"{"muscleStats": {"wings": {"level": 2}}}"#).unwrap();
    let error = document
        .into_state(&ProgressionEngine::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownMuscleGroup);
}

#[test]
fn test_zero_muscle_level_is_rejected() {
    let document =
        ProgressionDocument::from_json(r#"{"muscleStats": {"core": {"level": 0}}}"#).unwrap();
    let error = document
        .into_state(&ProgressionEngine::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(
        error.context.field.as_deref(),
        Some("muscleStats.core.level")
    );
}

#[test]
fn test_overall_level_above_cap_is_rejected() {
    let document = ProgressionDocument::from_json(r#"{"level": 999, "xp": 5}"#).unwrap();
    let error = document
        .into_state(&ProgressionEngine::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("level"));

    let capped = ProgressionEngine::new(ProgressionConfig {
        max_level: 10,
        ..ProgressionConfig::default()
    });
    let document = ProgressionDocument::from_json(r#"{"level": 11}"#).unwrap();
    assert!(document.into_state(&capped).is_err());
}

#[test]
fn test_muscle_levels_above_cap_are_accepted() {
    let document =
        ProgressionDocument::from_json(r#"{"muscleStats": {"legs": {"level": 75, "xp": 3}}}"#)
            .unwrap();
    let state = document
        .into_state(&ProgressionEngine::default())
        .unwrap();
    assert_eq!(state.muscle(MuscleGroup::Legs), LevelState::new(75, 3));
}

#[test]
fn test_negative_xp_fails_to_parse() {
    let error = ProgressionDocument::from_json(r#"{"xp": -5}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_touch_sets_timestamp() {
    let document = ProgressionDocument::default().touch();
    assert!(document.updated_at.is_some());
}
