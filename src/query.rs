// ABOUTME: Query parameter construction for recipe search endpoints
// ABOUTME: Enforces the omit-empty rule and validates nutrient min/max pairs before any I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search query builders.
//!
//! Absent or empty filter values are omitted from the outgoing request, never
//! sent as empty strings. Nutrient bound validation lives here, at the
//! boundary, so the client stays a pure I/O-and-transform layer: a `min > max`
//! pair is a caller bug and is rejected before a request is built.

use crate::errors::{RecipeApiError, RecipeResult};

/// Filters for the general-purpose complex search endpoint.
///
/// Every field is optional; only populated fields contribute query parameters.
#[derive(Debug, Clone, Default)]
pub struct ComplexSearchQuery {
    /// Free-text search query
    pub query: Option<String>,
    /// Cuisine filter (e.g. "italian")
    pub cuisine: Option<String>,
    /// Diet filter (e.g. "vegetarian")
    pub diet: Option<String>,
    /// Intolerance filter (e.g. "gluten")
    pub intolerances: Option<String>,
    /// Dish type filter (e.g. "dessert")
    pub meal_type: Option<String>,
    /// Minimum preparation time in minutes
    pub min_ready_time: Option<u32>,
    /// Maximum preparation time in minutes
    pub max_ready_time: Option<u32>,
    /// Sort key (e.g. "popularity", "price", "time")
    pub sort: Option<String>,
    /// Sort direction ("asc" or "desc"); only meaningful with `sort`
    pub sort_direction: Option<String>,
    /// Number of results to return
    pub number: Option<u32>,
    /// Pagination offset
    pub offset: Option<u32>,
}

impl ComplexSearchQuery {
    /// Query parameter pairs for the populated fields only
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_text(&mut params, "query", self.query.as_deref());
        push_text(&mut params, "cuisine", self.cuisine.as_deref());
        push_text(&mut params, "diet", self.diet.as_deref());
        push_text(&mut params, "intolerances", self.intolerances.as_deref());
        push_text(&mut params, "type", self.meal_type.as_deref());
        if let Some(min) = self.min_ready_time {
            params.push(("minReadyTime", min.to_string()));
        }
        if let Some(max) = self.max_ready_time {
            params.push(("maxReadyTime", max.to_string()));
        }
        push_text(&mut params, "sort", self.sort.as_deref());
        push_text(&mut params, "sortDirection", self.sort_direction.as_deref());
        if let Some(number) = self.number {
            params.push(("number", number.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}

/// Optional min/max bounds for the four tracked macros, used by the
/// find-by-nutrients endpoint.
///
/// Calories are kcal; protein, carbs, and fat are grams.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientBounds {
    /// Minimum calories
    pub min_calories: Option<f64>,
    /// Maximum calories
    pub max_calories: Option<f64>,
    /// Minimum protein
    pub min_protein: Option<f64>,
    /// Maximum protein
    pub max_protein: Option<f64>,
    /// Minimum carbohydrates
    pub min_carbs: Option<f64>,
    /// Maximum carbohydrates
    pub max_carbs: Option<f64>,
    /// Minimum fat
    pub min_fat: Option<f64>,
    /// Maximum fat
    pub max_fat: Option<f64>,
}

impl NutrientBounds {
    /// True when no bound is set; callers should fall back to a generic
    /// query instead of issuing an unconstrained nutrient search.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }

    /// Reject any pair where `min > max`.
    ///
    /// # Errors
    /// Returns [`RecipeApiError::InvalidQuery`] naming the offending macro.
    pub fn validate(&self) -> RecipeResult<()> {
        let pairs = [
            ("calories", self.min_calories, self.max_calories),
            ("protein", self.min_protein, self.max_protein),
            ("carbs", self.min_carbs, self.max_carbs),
            ("fat", self.min_fat, self.max_fat),
        ];
        for (macro_name, min, max) in pairs {
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(RecipeApiError::invalid_query(format!(
                        "{macro_name} bounds are inverted: min {min} > max {max}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Query parameter pairs for the set bounds only
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let entries = [
            ("minCalories", self.min_calories),
            ("maxCalories", self.max_calories),
            ("minProtein", self.min_protein),
            ("maxProtein", self.max_protein),
            ("minCarbs", self.min_carbs),
            ("maxCarbs", self.max_carbs),
            ("minFat", self.min_fat),
            ("maxFat", self.max_fat),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                params.push((key, format_bound(value)));
            }
        }
        params
    }
}

/// Push a text parameter unless it is absent or blank
fn push_text(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            params.push((key, trimmed.to_owned()));
        }
    }
}

/// Render a nutrient bound without a trailing `.0` for whole numbers
fn format_bound(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_contributes_no_params() {
        assert!(ComplexSearchQuery::default().to_params().is_empty());
    }

    #[test]
    fn blank_strings_are_omitted() {
        let query = ComplexSearchQuery {
            query: Some(String::new()),
            cuisine: Some("  ".to_owned()),
            diet: Some("vegan".to_owned()),
            ..ComplexSearchQuery::default()
        };
        assert_eq!(query.to_params(), vec![("diet", "vegan".to_owned())]);
    }

    #[test]
    fn populated_query_emits_exactly_its_fields() {
        let query = ComplexSearchQuery {
            query: Some("pasta".to_owned()),
            meal_type: Some("main course".to_owned()),
            max_ready_time: Some(45),
            sort: Some("popularity".to_owned()),
            number: Some(12),
            offset: Some(24),
            ..ComplexSearchQuery::default()
        };
        let params = query.to_params();
        assert_eq!(params.len(), 6);
        assert!(params.contains(&("query", "pasta".to_owned())));
        assert!(params.contains(&("type", "main course".to_owned())));
        assert!(params.contains(&("maxReadyTime", "45".to_owned())));
        assert!(params.contains(&("offset", "24".to_owned())));
    }

    #[test]
    fn sort_direction_rides_along_with_sort() {
        let query = ComplexSearchQuery {
            sort: Some("popularity".to_owned()),
            sort_direction: Some("desc".to_owned()),
            ..ComplexSearchQuery::default()
        };
        let params = query.to_params();
        assert!(params.contains(&("sort", "popularity".to_owned())));
        assert!(params.contains(&("sortDirection", "desc".to_owned())));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let bounds = NutrientBounds {
            min_protein: Some(80.0),
            max_protein: Some(20.0),
            ..NutrientBounds::default()
        };
        let err = bounds.validate().unwrap_err();
        assert!(err.to_string().contains("protein"));
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let bounds = NutrientBounds {
            min_fat: Some(10.0),
            max_fat: Some(10.0),
            ..NutrientBounds::default()
        };
        assert!(bounds.validate().is_ok());
    }

    #[test]
    fn only_set_bounds_become_params() {
        let bounds = NutrientBounds {
            min_calories: Some(600.0),
            max_calories: Some(800.0),
            ..NutrientBounds::default()
        };
        assert_eq!(
            bounds.to_params(),
            vec![
                ("minCalories", "600".to_owned()),
                ("maxCalories", "800".to_owned()),
            ]
        );
        assert!(!bounds.is_empty());
        assert!(NutrientBounds::default().is_empty());
    }

    #[test]
    fn fractional_bounds_keep_precision() {
        assert_eq!(format_bound(52.5), "52.5");
        assert_eq!(format_bound(600.0), "600");
    }
}
