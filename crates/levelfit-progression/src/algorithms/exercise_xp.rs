// ABOUTME: Per-exercise XP formula converting a logged set scheme into an XP award
// ABOUTME: Type-specific base formula, intensity multiplier, floor, and a hard per-exercise cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use levelfit_core::constants::exercise_xp::{
    ENDURANCE_REP_FACTOR, ENDURANCE_SET_FACTOR, ENDURANCE_WEIGHT_FACTOR,
    HYPERTROPHY_REP_FACTOR, HYPERTROPHY_SET_FACTOR, HYPERTROPHY_WEIGHT_FACTOR,
    INTENSITY_STEP, MAX_XP_PER_EXERCISE, STRENGTH_REP_FACTOR, STRENGTH_SET_FACTOR,
    STRENGTH_WEIGHT_FACTOR,
};
use levelfit_core::models::ExerciseType;

/// Un-multiplied award for one exercise
///
/// - strength: `weight x 0.1 + reps x 2 + sets x 5`
/// - hypertrophy: `weight x 0.05 + reps x 3 + sets x 8`
/// - endurance: `reps x 4 + sets x 10 + weight x 0.02`
// Unfused arithmetic: mul_add rounding would shift some floored awards
#[allow(clippy::suboptimal_flops)]
fn base_xp(exercise_type: ExerciseType, weight: f64, reps: u32, sets: u32) -> f64 {
    let reps = f64::from(reps);
    let sets = f64::from(sets);
    match exercise_type {
        ExerciseType::Strength => {
            weight * STRENGTH_WEIGHT_FACTOR + reps * STRENGTH_REP_FACTOR + sets * STRENGTH_SET_FACTOR
        }
        ExerciseType::Hypertrophy => {
            weight * HYPERTROPHY_WEIGHT_FACTOR
                + reps * HYPERTROPHY_REP_FACTOR
                + sets * HYPERTROPHY_SET_FACTOR
        }
        ExerciseType::Endurance => {
            reps * ENDURANCE_REP_FACTOR
                + sets * ENDURANCE_SET_FACTOR
                + weight * ENDURANCE_WEIGHT_FACTOR
        }
    }
}

/// XP award for one logged exercise
///
/// The base award is scaled by `1 + intensity x 0.1`, floored, and capped at
/// 200. There is no minimum: all-zero inputs award 0, and a negative or NaN
/// weight that drives the product below zero also awards 0.
///
/// # Example
///
/// ```rust
/// use levelfit_core::models::ExerciseType;
/// use levelfit_progression::calculate_exercise_xp;
///
/// // (80 x 0.1 + 10 x 2 + 3 x 5) x 1.8 = 77.4
/// assert_eq!(calculate_exercise_xp(ExerciseType::Strength, 8, 80.0, 10, 3), 77);
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_exercise_xp(
    exercise_type: ExerciseType,
    intensity: u8,
    weight: f64,
    reps: u32,
    sets: u32,
) -> u64 {
    let intensity_multiplier = 1.0 + f64::from(intensity) * INTENSITY_STEP;
    let final_xp = (base_xp(exercise_type, weight, reps, sets) * intensity_multiplier).floor();

    (final_xp as u64).min(MAX_XP_PER_EXERCISE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_reference_workout() {
        // base 43, multiplier 1.8, 77.4 floors to 77
        assert_eq!(
            calculate_exercise_xp(ExerciseType::Strength, 8, 80.0, 10, 3),
            77
        );
    }

    #[test]
    fn test_hypertrophy_formula() {
        // (80 x 0.05 + 10 x 3 + 3 x 8) = 58, x 1.8 = 104.4
        assert_eq!(
            calculate_exercise_xp(ExerciseType::Hypertrophy, 8, 80.0, 10, 3),
            104
        );
    }

    #[test]
    fn test_endurance_formula_without_weight() {
        // (15 x 4 + 3 x 10) = 90, x 1.6 = 144
        assert_eq!(
            calculate_exercise_xp(ExerciseType::Endurance, 6, 0.0, 15, 3),
            144
        );
    }

    #[test]
    fn test_zero_inputs_award_nothing() {
        for exercise_type in [
            ExerciseType::Strength,
            ExerciseType::Hypertrophy,
            ExerciseType::Endurance,
        ] {
            assert_eq!(calculate_exercise_xp(exercise_type, 0, 0.0, 0, 0), 0);
            assert_eq!(calculate_exercise_xp(exercise_type, 10, 0.0, 0, 0), 0);
        }
    }

    #[test]
    fn test_award_never_exceeds_cap() {
        let weights = [0.0, 50.0, 500.0, 1.0e9, f64::INFINITY];
        let counts = [0, 1, 12, 1_000, u32::MAX];
        for exercise_type in [
            ExerciseType::Strength,
            ExerciseType::Hypertrophy,
            ExerciseType::Endurance,
        ] {
            for intensity in [0, 5, 10, u8::MAX] {
                for weight in weights {
                    for count in counts {
                        let xp =
                            calculate_exercise_xp(exercise_type, intensity, weight, count, count);
                        assert!(xp <= 200, "{exercise_type} award {xp} exceeds the cap");
                    }
                }
            }
        }
        assert_eq!(
            calculate_exercise_xp(ExerciseType::Strength, 10, 1.0e6, 100, 100),
            200
        );
    }

    #[test]
    fn test_invalid_weight_does_not_underflow() {
        assert_eq!(
            calculate_exercise_xp(ExerciseType::Strength, 1, -1.0e6, 0, 0),
            0
        );
        assert_eq!(
            calculate_exercise_xp(ExerciseType::Strength, 1, f64::NAN, 5, 5),
            0
        );
    }
}
