// ABOUTME: Command implementations for levelfit-cli
// ABOUTME: Stateless calculators and commands that load and update a progression document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculator;
pub mod state;
