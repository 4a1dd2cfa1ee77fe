// ABOUTME: Configuration module for the levelfit-progression crate
// ABOUTME: Re-exports progression configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Curve parameters and level ceiling
pub mod progression;

pub use error::ConfigError;
pub use progression::ProgressionConfig;
