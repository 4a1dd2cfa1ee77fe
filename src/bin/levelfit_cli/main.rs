// ABOUTME: LevelFit CLI - command-line front end for the progression engine
// ABOUTME: Inspects thresholds, scores exercises, and applies workouts to a stored progression document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the first 10 level thresholds
//! levelfit-cli thresholds --levels 10
//!
//! # Score one exercise
//! levelfit-cli exercise-xp --type strength --intensity 8 --weight 80 --reps 10 --sets 3
//!
//! # Apply a workout to a stored document and print the updated document
//! levelfit-cli workout --state progress.json --add chest=77 --add triceps=60
//!
//! # Apply a canned workout three times
//! levelfit-cli preset chest-triceps --state progress.json --times 3
//!
//! # Show progress bars for a stored document
//! levelfit-cli progress --state progress.json
//! ```
//!
//! The tool never writes files: redirect stdout to persist a document.

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use levelfit::config::AppConfig;
use levelfit::constants::service_names;
use levelfit::logging::LoggingConfig;
use levelfit::ProgressionEngine;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "levelfit-cli",
    about = "LevelFit progression CLI",
    long_about = "Command-line tool for inspecting level thresholds and applying workouts to a progression document."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print cumulative XP thresholds per level
    Thresholds {
        /// Number of levels to list
        #[arg(long, default_value = "10")]
        levels: u32,
    },

    /// Score a single exercise
    ExerciseXp {
        /// Exercise type (strength, hypertrophy, endurance)
        #[arg(long = "type")]
        exercise_type: String,

        /// Effort from 0 to 10
        #[arg(long, default_value = "5")]
        intensity: u8,

        /// Load in kilograms
        #[arg(long, default_value = "0")]
        weight: f64,

        /// Repetitions per set
        #[arg(long)]
        reps: u32,

        /// Number of sets
        #[arg(long)]
        sets: u32,
    },

    /// Apply per-muscle XP to a progression document
    Workout {
        /// Progression document to start from (defaults to a fresh state)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Muscle XP as muscle=amount, repeatable and applied in order
        #[arg(long = "add", value_name = "MUSCLE=AMOUNT")]
        add: Vec<String>,

        /// JSON file with a list of exercises to score and apply
        #[arg(long)]
        exercises: Option<PathBuf>,
    },

    /// Apply a canned workout to a progression document
    Preset {
        /// Preset name (chest-triceps, back-biceps, legs, shoulders, full-body)
        name: String,

        /// Progression document to start from (defaults to a fresh state)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Number of times to apply the preset
        #[arg(long, default_value = "1")]
        times: u32,
    },

    /// Show level progress for a progression document
    Progress {
        /// Progression document to read (defaults to a fresh state)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Print the progress as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a fresh progression document
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().with_service_name(service_names::LEVELFIT_CLI);
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = AppConfig::from_env()?;
    config.log_summary();
    let engine = ProgressionEngine::new(config.progression);

    match cli.command {
        Command::Thresholds { levels } => commands::calculator::thresholds(&engine, levels),
        Command::ExerciseXp {
            exercise_type,
            intensity,
            weight,
            reps,
            sets,
        } => commands::calculator::exercise_xp(&exercise_type, intensity, weight, reps, sets)?,
        Command::Workout {
            state,
            add,
            exercises,
        } => commands::state::workout(&engine, state.as_deref(), &add, exercises.as_deref())?,
        Command::Preset { name, state, times } => {
            commands::state::preset(&engine, &name, state.as_deref(), times)?;
        }
        Command::Progress { state, json } => {
            commands::state::progress(&engine, state.as_deref(), json)?;
        }
        Command::Reset => commands::state::reset(&engine)?,
    }

    debug!("Command completed");
    Ok(())
}
