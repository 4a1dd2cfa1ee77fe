// ABOUTME: Helper modules for levelfit-cli
// ABOUTME: Output formatting and progression document file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod state_file;
