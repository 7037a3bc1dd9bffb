// ABOUTME: Pure algorithmic core: ingredient-match scoring and nutrition-gap range derivation
// ABOUTME: No I/O; unit-testable independent of the HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ingredient matching and nutrition-gap derivation.
//!
//! Two pieces of real logic live here. [`score_ingredient_matches`] turns raw
//! find-by-ingredients results into scored, ranked [`MatchedRecipe`]s:
//! recipes using more of the caller's pantry rank first, with completion
//! percentage as the tie-break. [`nutrition_gap`] converts the difference
//! between a daily macro goal and what was already consumed into a search
//! *range* rather than an exact target, since recipes rarely hit an exact
//! number; tiny remainders stay below per-macro thresholds and emit nothing.

use crate::models::{MacroTotals, MatchedRecipe, RawIngredientMatch, Recipe};
use crate::query::NutrientBounds;

/// Remainders at or below these thresholds emit no search bounds, so a
/// nearly-met goal does not produce a nonsensical near-zero range.
const CALORIES_GAP_THRESHOLD: f64 = 100.0;
const PROTEIN_GAP_THRESHOLD_G: f64 = 5.0;
const CARBS_GAP_THRESHOLD_G: f64 = 10.0;
const FAT_GAP_THRESHOLD_G: f64 = 5.0;

/// Asymmetric scale and clamp constants per macro: the lower bound is a
/// fraction of the remainder with a floor, the upper bound a multiple of the
/// remainder with a ceiling.
const CALORIES_RANGE: GapRange = GapRange {
    low_scale: 0.3,
    low_floor: 50.0,
    high_scale: 1.2,
    high_ceiling: 800.0,
};
const PROTEIN_RANGE: GapRange = GapRange {
    low_scale: 0.3,
    low_floor: 1.0,
    high_scale: 1.5,
    high_ceiling: 100.0,
};
const CARBS_RANGE: GapRange = GapRange {
    low_scale: 0.2,
    low_floor: 1.0,
    high_scale: 1.3,
    high_ceiling: 100.0,
};
const FAT_RANGE: GapRange = GapRange {
    low_scale: 0.2,
    low_floor: 1.0,
    high_scale: 1.5,
    high_ceiling: 50.0,
};

/// Scale/clamp parameters for one macro's search range
struct GapRange {
    low_scale: f64,
    low_floor: f64,
    high_scale: f64,
    high_ceiling: f64,
}

impl GapRange {
    /// Derive a (min, max) pair from a remaining amount.
    ///
    /// The ceiling can undercut the scaled lower bound for very large
    /// remainders; the pair is clamped so `min <= max` always holds.
    fn bounds_for(&self, remaining: f64) -> (f64, f64) {
        let high = (remaining * self.high_scale).min(self.high_ceiling);
        let low = (remaining * self.low_scale).max(self.low_floor).min(high);
        (low, high)
    }
}

/// The gap between a daily nutrition goal and what has been consumed,
/// expressed both as raw remainders and as derived search bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionGap {
    /// Remaining macro amounts, floored at zero
    pub remaining: MacroTotals,
    /// Search bounds for recipes that would fill the gap; empty when every
    /// remainder is at or below its threshold (callers should then issue a
    /// generic healthy-recipe query instead)
    pub bounds: NutrientBounds,
}

/// Derive recipe search bounds from a daily goal and the intake so far.
///
/// Pure function. Remainders are `max(0, goal - consumed)` per macro; a
/// remainder only contributes bounds when it exceeds its threshold.
#[must_use]
pub fn nutrition_gap(goals: &MacroTotals, consumed: &MacroTotals) -> NutritionGap {
    let remaining = MacroTotals {
        calories: (goals.calories - consumed.calories).max(0.0),
        protein: (goals.protein - consumed.protein).max(0.0),
        carbs: (goals.carbs - consumed.carbs).max(0.0),
        fat: (goals.fat - consumed.fat).max(0.0),
    };

    let mut bounds = NutrientBounds::default();
    if remaining.calories > CALORIES_GAP_THRESHOLD {
        let (low, high) = CALORIES_RANGE.bounds_for(remaining.calories);
        bounds.min_calories = Some(low);
        bounds.max_calories = Some(high);
    }
    if remaining.protein > PROTEIN_GAP_THRESHOLD_G {
        let (low, high) = PROTEIN_RANGE.bounds_for(remaining.protein);
        bounds.min_protein = Some(low);
        bounds.max_protein = Some(high);
    }
    if remaining.carbs > CARBS_GAP_THRESHOLD_G {
        let (low, high) = CARBS_RANGE.bounds_for(remaining.carbs);
        bounds.min_carbs = Some(low);
        bounds.max_carbs = Some(high);
    }
    if remaining.fat > FAT_GAP_THRESHOLD_G {
        let (low, high) = FAT_RANGE.bounds_for(remaining.fat);
        bounds.min_fat = Some(low);
        bounds.max_fat = Some(high);
    }

    NutritionGap { remaining, bounds }
}

/// Match percentage for a used/total ingredient count pair, in \[0, 100\]
#[must_use]
pub fn match_percentage(match_count: usize, total_ingredients: usize) -> u8 {
    if total_ingredients == 0 {
        return 0;
    }
    (match_count as f64 / total_ingredients as f64 * 100.0).round() as u8
}

/// Score raw find-by-ingredients results and rank them.
///
/// Ordering is strict-count-first: recipes using more of the caller's
/// ingredients rank ahead of recipes with a higher completion ratio, and
/// `match_percentage` breaks ties. The sort is stable, so recipes tied on
/// both keys keep the API's order.
#[must_use]
pub fn score_ingredient_matches(raw_matches: Vec<RawIngredientMatch>) -> Vec<MatchedRecipe> {
    let mut scored: Vec<MatchedRecipe> = raw_matches
        .into_iter()
        .map(|raw| {
            let match_count = raw.used_ingredients.len();
            let total_ingredients = match_count + raw.missed_ingredients.len();
            MatchedRecipe {
                recipe: Recipe::from_raw(raw.recipe),
                match_count,
                total_ingredients,
                match_percentage: match_percentage(match_count, total_ingredients),
                used_ingredient_names: raw
                    .used_ingredients
                    .into_iter()
                    .map(|ing| ing.name)
                    .collect(),
                missed_ingredient_names: raw
                    .missed_ingredients
                    .into_iter()
                    .map(|ing| ing.name)
                    .collect(),
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then(b.match_percentage.cmp(&a.match_percentage))
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use serde_json::json;

    fn totals(calories: f64, protein: f64, carbs: f64, fat: f64) -> MacroTotals {
        MacroTotals {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    fn named(name: &str) -> Ingredient {
        Ingredient {
            name: name.to_owned(),
            ..Ingredient::default()
        }
    }

    fn raw_match(id: u64, used: usize, missed: usize) -> RawIngredientMatch {
        serde_json::from_value(json!({
            "id": id,
            "usedIngredients": (0..used).map(|i| json!({ "name": format!("used-{i}") })).collect::<Vec<_>>(),
            "missedIngredients": (0..missed).map(|i| json!({ "name": format!("missed-{i}") })).collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    #[test]
    fn fully_met_goal_emits_nothing() {
        let goal = totals(2000.0, 150.0, 250.0, 67.0);
        let gap = nutrition_gap(&goal, &goal);

        assert_eq!(gap.remaining, totals(0.0, 0.0, 0.0, 0.0));
        assert!(gap.bounds.is_empty());
    }

    #[test]
    fn untouched_goal_emits_clamped_calorie_range() {
        let gap = nutrition_gap(&totals(2000.0, 0.0, 0.0, 0.0), &MacroTotals::default());

        // min = max(50, 2000 * 0.3) = 600, max = min(800, 2000 * 1.2) = 800
        assert_eq!(gap.bounds.min_calories, Some(600.0));
        assert_eq!(gap.bounds.max_calories, Some(800.0));
    }

    #[test]
    fn overconsumed_macro_floors_at_zero() {
        let gap = nutrition_gap(
            &totals(2000.0, 100.0, 200.0, 60.0),
            &totals(2500.0, 180.0, 300.0, 90.0),
        );
        assert_eq!(gap.remaining, totals(0.0, 0.0, 0.0, 0.0));
        assert!(gap.bounds.is_empty());
    }

    #[test]
    fn threshold_boundaries_are_exclusive() {
        // Exactly at threshold: nothing emitted
        let gap = nutrition_gap(&totals(100.0, 5.0, 10.0, 5.0), &MacroTotals::default());
        assert!(gap.bounds.is_empty());

        // Just above: every macro emits a pair
        let gap = nutrition_gap(&totals(101.0, 5.1, 10.1, 5.1), &MacroTotals::default());
        assert!(gap.bounds.min_calories.is_some());
        assert!(gap.bounds.min_protein.is_some());
        assert!(gap.bounds.min_carbs.is_some());
        assert!(gap.bounds.min_fat.is_some());
    }

    #[test]
    fn emitted_pairs_are_never_inverted() {
        // A huge remainder would scale the lower bound past the upper
        // ceiling without the clamp (e.g. 4000 * 0.3 = 1200 > 800).
        for calories in [150.0, 700.0, 2800.0, 4000.0, 10_000.0] {
            let gap = nutrition_gap(&totals(calories, 400.0, 600.0, 200.0), &MacroTotals::default());
            assert!(gap.bounds.validate().is_ok(), "inverted pair at {calories}");
        }
    }

    #[test]
    fn protein_range_uses_its_own_constants() {
        let gap = nutrition_gap(&totals(0.0, 40.0, 0.0, 0.0), &MacroTotals::default());
        // min = max(1, 40 * 0.3) = 12, max = min(100, 40 * 1.5) = 60
        assert_eq!(gap.bounds.min_protein, Some(12.0));
        assert_eq!(gap.bounds.max_protein, Some(60.0));
        assert!(gap.bounds.min_calories.is_none());
    }

    #[test]
    fn percentage_rounds_and_handles_empty_totals() {
        assert_eq!(match_percentage(3, 4), 75);
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(5, 5), 100);
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn count_dominates_percentage_in_ranking() {
        // A(3 of 4, 75%), B(3 of 3, 100%), C(4 of 8, 50%)
        let ranked = score_ingredient_matches(vec![
            raw_match(1, 3, 1),
            raw_match(2, 3, 0),
            raw_match(3, 4, 4),
        ]);

        let ids: Vec<u64> = ranked.iter().map(|m| m.recipe.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(ranked[0].match_percentage, 50);
        assert_eq!(ranked[1].match_percentage, 100);
    }

    #[test]
    fn scoring_keeps_ingredient_names() {
        let raw = RawIngredientMatch {
            recipe: serde_json::from_value(json!({ "id": 5 })).unwrap(),
            used_ingredients: vec![named("rice"), named("egg")],
            missed_ingredients: vec![named("scallion")],
        };

        let scored = score_ingredient_matches(vec![raw]);
        assert_eq!(scored[0].match_count, 2);
        assert_eq!(scored[0].total_ingredients, 3);
        assert_eq!(scored[0].used_ingredient_names, vec!["rice", "egg"]);
        assert_eq!(scored[0].missed_ingredient_names, vec!["scallion"]);
    }
}
