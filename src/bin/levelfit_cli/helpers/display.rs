// ABOUTME: Output formatting helpers for levelfit-cli
// ABOUTME: Threshold tables, progress bars, and JSON documents on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use levelfit::document::ProgressionDocument;
use levelfit::errors::AppResult;
use levelfit::{LevelProgress, MuscleProgress, RankTier};
use serde_json::json;

const BAR_WIDTH: usize = 20;

fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Print cumulative thresholds with the step from the previous level
pub fn print_threshold_table(curve: &str, rows: &[(u32, u64)]) {
    println!("Difficulty curve: {curve}");
    println!("{:>6}  {:>14}  {:>12}", "Level", "Total XP", "Step");
    println!("{}", "=".repeat(36));
    let mut previous = 0_u64;
    for &(level, xp) in rows {
        println!(
            "{level:>6}  {xp:>14}  {:>12}",
            xp.saturating_sub(previous)
        );
        previous = xp;
    }
}

/// Print a progression document as pretty JSON
pub fn print_document(document: &ProgressionDocument) -> AppResult<()> {
    println!("{}", document.to_json_pretty()?);
    Ok(())
}

/// Print overall and per-muscle progress as a table
pub fn print_progress_table(overall: &LevelProgress, muscles: &[MuscleProgress]) {
    println!(
        "Overall  Lv {:>3} {:<10} {} {:>5.1}%  {} XP to next",
        overall.current_level,
        RankTier::for_level(overall.current_level).title(),
        progress_bar(overall.progress_percentage),
        overall.progress_percentage,
        overall.xp_to_next_level
    );
    println!("{}", "=".repeat(72));
    for row in muscles {
        println!(
            "{:<9}Lv {:>3} {:<10} {} {:>5.1}%  {} XP to next",
            row.muscle.as_str(),
            row.level,
            row.rank.title(),
            progress_bar(row.progress_percentage),
            row.progress_percentage,
            row.xp_to_next_level
        );
    }
}

/// Print overall and per-muscle progress as JSON
pub fn print_progress_json(overall: &LevelProgress, muscles: &[MuscleProgress]) -> AppResult<()> {
    let body = json!({
        "overall": overall,
        "muscles": muscles,
    });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
