// ABOUTME: Reads progression documents and exercise lists from disk for levelfit-cli
// ABOUTME: Missing --state means a fresh progression state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use levelfit::document::ProgressionDocument;
use levelfit::errors::{AppError, AppResult};
use levelfit::models::ProgressionState;
use levelfit::ProgressionEngine;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read a file and deserialize its JSON content
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Load state from a progression document, or start fresh without one
pub fn load_state(engine: &ProgressionEngine, path: Option<&Path>) -> AppResult<ProgressionState> {
    let Some(path) = path else {
        return Ok(ProgressionEngine::reset());
    };

    let document: ProgressionDocument = read_json_file(path)?;
    debug!(path = %path.display(), level = document.level, "Loaded progression document");
    document.into_state(engine)
}
