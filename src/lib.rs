// ABOUTME: Library entry point for the forkcast recipe data client
// ABOUTME: Spoonacular API façade with ingredient matching, nutrition-gap search, and sample fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # forkcast
//!
//! A stateless client for the Spoonacular recipe API with a deterministic
//! local fallback. Built for content-discovery surfaces that must always
//! render something: environmental failures (missing credentials, network
//! errors, bad statuses) are absorbed and masked by an embedded sample
//! catalog, distinguishable from live data only through logs.
//!
//! ## Modules
//!
//! - **client**: [`client::RecipeClient`], the single integration point —
//!   search, ingredient matching, nutrient-range search, detail lookup
//! - **matching**: pure ingredient-match scoring and nutrition-gap range
//!   derivation
//! - **models**: raw wire types and the normalized [`models::Recipe`] record
//! - **query**: omit-empty query builders and nutrient bound validation
//! - **sample**: the embedded fallback catalog
//! - **config**: environment-driven configuration and credential checks
//! - **errors**: the error taxonomy; only [`errors::RecipeApiError::InvalidQuery`]
//!   and [`errors::RecipeApiError::NotFound`] ever reach callers
//!
//! ## Example
//! ```rust,no_run
//! use forkcast::client::RecipeClient;
//! use forkcast::config::SpoonacularConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RecipeClient::new(SpoonacularConfig::from_env());
//! let recipes = client.random_recipes(6, None).await;
//! for recipe in recipes {
//!     println!("{} ({} min)", recipe.title, recipe.ready_in_minutes);
//! }
//! # Ok(())
//! # }
//! ```

/// Spoonacular API client with sample-data fallback
pub mod client;

/// Environment-driven configuration and credential sanity checks
pub mod config;

/// Error taxonomy for recipe API operations
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// Ingredient-match scoring and nutrition-gap derivation
pub mod matching;

/// Recipe data model: raw wire types and normalized records
pub mod models;

/// Search query builders with the omit-empty rule
pub mod query;

/// Embedded sample recipe catalog
pub mod sample;

pub use client::RecipeClient;
pub use config::SpoonacularConfig;
pub use errors::{RecipeApiError, RecipeResult};
pub use matching::{nutrition_gap, score_ingredient_matches, NutritionGap};
pub use models::{MacroTotals, MatchedRecipe, Recipe};
pub use query::{ComplexSearchQuery, NutrientBounds};
pub use sample::SampleCatalog;
