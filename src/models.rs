// ABOUTME: Recipe data model with raw wire types and normalized records
// ABOUTME: Single pure normalization step maps heterogeneous API JSON to fully-populated records
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe data model.
//!
//! The Spoonacular API returns heterogeneous shapes: most fields are optional
//! and several have aliases (`cookingMinutes` vs `readyInMinutes`). Raw wire
//! types ([`RawRecipe`] and friends) deserialize with every field optional;
//! [`Recipe::from_raw`] is the one place defaults are applied. Everything
//! downstream of normalization sees fully-populated records, whether the data
//! came from the live API or the embedded sample catalog, so no caller ever
//! branches on field presence.
//!
//! Normalization is idempotent: serializing a [`Recipe`] back into the wire
//! shape and normalizing again yields the same record.

use serde::{Deserialize, Serialize};

/// Default servings when the API omits the field
const DEFAULT_SERVINGS: u32 = 4;

/// Default preparation time in minutes when the API omits both
/// `readyInMinutes` and `cookingMinutes`
const DEFAULT_READY_IN_MINUTES: u32 = 30;

/// A single recipe ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g. "ground beef")
    #[serde(default)]
    pub name: String,
    /// Quantity in `unit`
    #[serde(default)]
    pub amount: f64,
    /// Measurement unit (e.g. "cup", "oz")
    #[serde(default)]
    pub unit: String,
    /// Free-text label as written in the source recipe
    #[serde(default)]
    pub original: String,
}

/// A nutrient entry from the recipe's nutrition block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    /// Nutrient name (e.g. "Calories", "Protein")
    pub name: String,
    /// Amount in `unit`
    #[serde(default)]
    pub amount: f64,
    /// Unit for `amount` (e.g. "kcal", "g")
    #[serde(default)]
    pub unit: String,
    /// Share of the recommended daily intake, as a percentage
    #[serde(default)]
    pub percent_of_daily_needs: f64,
}

/// Nutrition facts for a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Per-nutrient amounts; empty when the API returned no nutrition data
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

/// One step within an instruction set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// 1-based step number
    pub number: u32,
    /// Step text
    pub step: String,
    /// Ingredients referenced by this step (names only on the wire)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<Ingredient>,
}

/// An ordered set of preparation steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionSet {
    /// Steps in preparation order
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

/// Daily macro totals, used for both goals and consumed intake.
///
/// All values are non-negative; calories in kcal, macros in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// Raw recipe as returned by the API, every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    /// Recipe id; the one field the API always supplies
    pub id: u64,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Total preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// Alias some endpoints use instead of `readyInMinutes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_minutes: Option<u32>,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Health score in \[0, 100\]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    /// Popularity score in \[0, 100\]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoonacular_score: Option<f64>,
    /// Likes on the source platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_likes: Option<u32>,
    /// Price per serving in cents; the API reports fractional cents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_serving: Option<f64>,
    /// Summary paragraph (HTML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Link to the original recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Dish types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_types: Option<Vec<String>>,
    /// Cuisines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    /// Diet labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<String>>,
    /// Occasions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasions: Option<Vec<String>>,
    /// Full ingredient list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_ingredients: Option<Vec<Ingredient>>,
    /// Step-level instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_instructions: Option<Vec<InstructionSet>>,
    /// Nutrition facts block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

/// Raw find-by-ingredients result: a partial recipe plus the ingredient
/// overlap the API computed against the caller's pantry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredientMatch {
    /// Partial recipe fields (id, title, image, likes)
    #[serde(flatten)]
    pub recipe: RawRecipe,
    /// Caller ingredients this recipe uses
    #[serde(default)]
    pub used_ingredients: Vec<Ingredient>,
    /// Recipe ingredients the caller is missing
    #[serde(default)]
    pub missed_ingredients: Vec<Ingredient>,
}

/// A fully-normalized recipe: every field populated, no optionality
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe id
    pub id: u64,
    /// Display title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Total preparation time in minutes
    pub ready_in_minutes: u32,
    /// Number of servings the recipe yields
    pub servings: u32,
    /// Health score in \[0, 100\]
    pub health_score: f64,
    /// Spoonacular popularity score in \[0, 100\]
    pub spoonacular_score: f64,
    /// Number of likes on the source platform
    pub aggregate_likes: u32,
    /// Price per serving in whole cents; divide by 100 only at render time
    #[serde(rename = "pricePerServing")]
    pub price_per_serving_cents: u32,
    /// Summary paragraph (HTML)
    pub summary: String,
    /// Link to the original recipe
    pub source_url: String,
    /// Dish types (e.g. "dinner", "main course")
    pub dish_types: Vec<String>,
    /// Cuisines (e.g. "Italian")
    pub cuisines: Vec<String>,
    /// Diet labels (e.g. "vegetarian", "gluten free")
    pub diets: Vec<String>,
    /// Occasions (e.g. "fall", "super bowl")
    pub occasions: Vec<String>,
    /// Full ingredient list
    #[serde(rename = "extendedIngredients")]
    pub ingredients: Vec<Ingredient>,
    /// Step-level instructions
    #[serde(rename = "analyzedInstructions")]
    pub instructions: Vec<InstructionSet>,
    /// Nutrition facts
    pub nutrition: Nutrition,
}

impl Recipe {
    /// Normalize a raw API recipe into a fully-populated record.
    ///
    /// This is the only place field defaults are applied: `servings` → 4,
    /// `readyInMinutes` → `cookingMinutes` → 30, numeric scores → 0, text
    /// fields → empty, collections → empty. `pricePerServing` is rounded to
    /// whole cents.
    #[must_use]
    pub fn from_raw(raw: RawRecipe) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            image: raw.image.unwrap_or_default(),
            ready_in_minutes: raw
                .ready_in_minutes
                .or(raw.cooking_minutes)
                .unwrap_or(DEFAULT_READY_IN_MINUTES),
            servings: raw.servings.unwrap_or(DEFAULT_SERVINGS),
            health_score: raw.health_score.unwrap_or(0.0),
            spoonacular_score: raw.spoonacular_score.unwrap_or(0.0),
            aggregate_likes: raw.aggregate_likes.unwrap_or(0),
            price_per_serving_cents: raw
                .price_per_serving
                .map_or(0, |cents| cents.round().max(0.0) as u32),
            summary: raw.summary.unwrap_or_default(),
            source_url: raw.source_url.unwrap_or_default(),
            dish_types: raw.dish_types.unwrap_or_default(),
            cuisines: raw.cuisines.unwrap_or_default(),
            diets: raw.diets.unwrap_or_default(),
            occasions: raw.occasions.unwrap_or_default(),
            ingredients: raw.extended_ingredients.unwrap_or_default(),
            instructions: raw.analyzed_instructions.unwrap_or_default(),
            nutrition: raw.nutrition.unwrap_or_default(),
        }
    }
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Self::from_raw(raw)
    }
}

/// A recipe scored against the caller's pantry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRecipe {
    /// The underlying recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// How many of the caller's ingredients this recipe uses
    pub match_count: usize,
    /// Total ingredients the recipe needs (used + missed)
    pub total_ingredients: usize,
    /// `round(match_count / total_ingredients * 100)`, 0 when the total is 0
    pub match_percentage: u8,
    /// Names of the caller's ingredients this recipe uses
    pub used_ingredient_names: Vec<String>,
    /// Names of the ingredients the caller still needs
    pub missed_ingredient_names: Vec<String>,
}
