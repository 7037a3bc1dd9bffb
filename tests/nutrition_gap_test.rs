// ABOUTME: Integration tests for nutrition-gap query derivation
// ABOUTME: Covers thresholds, clamping, and the never-inverted bounds property
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]

use forkcast::models::MacroTotals;
use forkcast::{nutrition_gap, NutrientBounds};

fn totals(calories: f64, protein: f64, carbs: f64, fat: f64) -> MacroTotals {
    MacroTotals {
        calories,
        protein,
        carbs,
        fat,
    }
}

#[test]
fn met_goal_yields_zero_remainders_and_no_bounds() {
    let goal = totals(2000.0, 150.0, 250.0, 67.0);
    let gap = nutrition_gap(&goal, &goal);

    assert_eq!(gap.remaining, totals(0.0, 0.0, 0.0, 0.0));
    assert_eq!(gap.bounds, NutrientBounds::default());
    assert!(gap.bounds.is_empty());
}

#[test]
fn empty_day_emits_documented_calorie_range() {
    let gap = nutrition_gap(
        &totals(2000.0, 150.0, 250.0, 67.0),
        &totals(0.0, 0.0, 0.0, 0.0),
    );

    // remaining.calories = 2000: min = max(50, 600) = 600, max = min(800, 2400) = 800
    assert_eq!(gap.bounds.min_calories, Some(600.0));
    assert_eq!(gap.bounds.max_calories, Some(800.0));
    assert!((gap.remaining.calories - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn bounds_are_never_inverted_across_a_remainder_sweep() {
    // Includes remainders where the original scaling would cross the ceiling
    // (calories beyond ~2667 scale the lower bound past the 800 cap).
    let mut calories = 0.0;
    while calories <= 12_000.0 {
        let gap = nutrition_gap(
            &totals(calories, calories / 10.0, calories / 8.0, calories / 30.0),
            &totals(0.0, 0.0, 0.0, 0.0),
        );
        assert!(
            gap.bounds.validate().is_ok(),
            "inverted bounds for calories remainder {calories}"
        );
        calories += 37.5;
    }
}

#[test]
fn subthreshold_remainders_emit_no_keys() {
    // Small leftovers: 90 kcal, 4g protein, 9g carbs, 4g fat, all at or
    // below their thresholds (100 / 5 / 10 / 5).
    let gap = nutrition_gap(
        &totals(2000.0, 150.0, 250.0, 67.0),
        &totals(1910.0, 146.0, 241.0, 63.0),
    );

    assert!(gap.bounds.is_empty());
    assert!(gap.remaining.calories > 0.0);
}

#[test]
fn each_macro_emits_independently() {
    // Only the protein gap exceeds its threshold
    let gap = nutrition_gap(
        &totals(2000.0, 150.0, 250.0, 67.0),
        &totals(1950.0, 100.0, 245.0, 65.0),
    );

    assert!(gap.bounds.min_calories.is_none());
    assert!(gap.bounds.min_carbs.is_none());
    assert!(gap.bounds.min_fat.is_none());
    // remaining.protein = 50: min = max(1, 15) = 15, max = min(100, 75) = 75
    assert_eq!(gap.bounds.min_protein, Some(15.0));
    assert_eq!(gap.bounds.max_protein, Some(75.0));
}

#[test]
fn overconsumption_never_goes_negative() {
    let gap = nutrition_gap(
        &totals(1800.0, 120.0, 200.0, 60.0),
        &totals(2600.0, 200.0, 350.0, 110.0),
    );

    assert_eq!(gap.remaining, totals(0.0, 0.0, 0.0, 0.0));
    assert!(gap.bounds.is_empty());
}
