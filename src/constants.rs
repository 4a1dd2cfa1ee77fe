// ABOUTME: Application-level constants for service identity and environment variable names
// ABOUTME: Shared by logging, configuration, and the CLI binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Engine formula constants live in `levelfit_core::constants`; this module
//! only holds what the application layer needs.

/// Service names used in structured logs
pub mod service_names {
    /// Default service name
    pub const LEVELFIT: &str = "levelfit";
    /// Name reported by the command-line tool
    pub const LEVELFIT_CLI: &str = "levelfit-cli";
}

/// Environment variable names read by the application layer
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level or full `EnvFilter` directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line numbers in log lines
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in log lines
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Service name override
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Service version override
    pub const SERVICE_VERSION: &str = "SERVICE_VERSION";
}

/// Crate targets whose log level follows the configured level
pub const LOG_TARGETS: [&str; 4] = [
    "levelfit",
    "levelfit_cli",
    "levelfit_core",
    "levelfit_progression",
];
