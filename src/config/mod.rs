// ABOUTME: Configuration module for the LevelFit application layer
// ABOUTME: Environment settings plus the progression engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: deployment environment and log level from environment variables
//! - **Progression**: curve parameters, re-exported from `levelfit-progression`

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use levelfit_progression::config::{ConfigError, ProgressionConfig};
