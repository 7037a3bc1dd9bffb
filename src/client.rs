// ABOUTME: Spoonacular recipe API client with sample-data fallback
// ABOUTME: Owns request construction, response normalization, and always-render-something failure policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe data client.
//!
//! [`RecipeClient`] is the single integration point between a presentation
//! layer and the Spoonacular API. Every operation returns normalized
//! [`Recipe`] records whether served live or from the embedded sample
//! catalog; callers never branch on which source answered. Environmental
//! failures (missing credentials, transport errors, non-2xx statuses,
//! undecodable bodies) are absorbed here and logged; only invalid caller
//! input and a live-API not-found propagate.
//!
//! The client holds no shared mutable state, so concurrent calls are
//! independent. Cancellation is drop-based: abandoning a returned future
//! cancels the in-flight request, and the simulated fallback latency uses
//! `tokio::time::sleep`, which is likewise cancelled on drop, so abandoned
//! views leak no timers. No retries: a single failed attempt goes straight
//! to fallback.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SpoonacularConfig;
use crate::errors::{RecipeApiError, RecipeResult};
use crate::matching::{match_percentage, score_ingredient_matches};
use crate::models::{Ingredient, MatchedRecipe, RawIngredientMatch, RawRecipe, Recipe};
use crate::query::{ComplexSearchQuery, NutrientBounds};
use crate::sample::SampleCatalog;

/// Default number of recipes for search operations
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Default number of recipes for the random/home feed
pub const DEFAULT_RANDOM_COUNT: usize = 6;

/// Complex search responses wrap results in an envelope
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<RawRecipe>,
}

/// Random recipe responses use their own envelope
#[derive(Debug, Deserialize)]
struct RandomRecipesResponse {
    #[serde(default)]
    recipes: Vec<RawRecipe>,
}

/// Client for the Spoonacular recipe API with local sample-data fallback
pub struct RecipeClient {
    config: SpoonacularConfig,
    http: reqwest::Client,
    catalog: SampleCatalog,
}

impl RecipeClient {
    /// Create a client with the built-in sample catalog
    #[must_use]
    pub fn new(config: SpoonacularConfig) -> Self {
        Self::with_catalog(config, SampleCatalog::builtin())
    }

    /// Create a client with a custom fallback catalog (tests substitute a
    /// smaller fixture here)
    #[must_use]
    pub fn with_catalog(config: SpoonacularConfig, catalog: SampleCatalog) -> Self {
        let http = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            config,
            http,
            catalog,
        }
    }

    /// True when the configured API key looks usable; false routes every
    /// operation through the fallback path
    #[must_use]
    pub fn has_usable_credentials(&self) -> bool {
        self.config.has_usable_credentials()
    }

    /// Draw up to `count` sample recipes in random order.
    ///
    /// Simulates API latency (configurable, default 500 ms) so callers
    /// exercise the same loading-state path as live calls. Content is
    /// deterministic, order is not.
    pub async fn sample_recipes(&self, count: usize) -> Vec<Recipe> {
        tokio::time::sleep(Duration::from_millis(self.config.fallback_latency_ms)).await;
        self.catalog.sample(count, &mut rand::thread_rng())
    }

    /// Fetch `count` random recipes, optionally constrained by comma-joined
    /// tags (e.g. "vegetarian,dessert"). Falls back to samples.
    pub async fn random_recipes(&self, count: usize, tags: Option<&str>) -> Vec<Recipe> {
        if !self.has_usable_credentials() {
            debug!("random_recipes: no usable credentials, serving samples");
            return self.sample_recipes(count).await;
        }

        let mut params = vec![("number", count.to_string())];
        if let Some(tags) = tags.filter(|t| !t.trim().is_empty()) {
            params.push(("tags", tags.trim().to_owned()));
        }

        match self
            .get_json::<RandomRecipesResponse>("/recipes/random", &params, "random recipes")
            .await
        {
            Ok(response) => response.recipes.into_iter().map(Recipe::from_raw).collect(),
            Err(err) => {
                warn!(error = %err, "random_recipes failed, serving samples");
                self.sample_recipes(count).await
            }
        }
    }

    /// General-purpose search with free-text, cuisine, diet, dish type,
    /// time, sort, and pagination filters.
    ///
    /// Requests recipe information, filled ingredients, and nutrition inline
    /// so a results grid renders from a single round trip instead of one
    /// detail fetch per card. Falls back to samples.
    pub async fn search_complex(&self, query: &ComplexSearchQuery) -> Vec<Recipe> {
        let count = query.number.map_or(DEFAULT_PAGE_SIZE, |n| n as usize);
        if !self.has_usable_credentials() {
            debug!("search_complex: no usable credentials, serving samples");
            return self.sample_recipes(count).await;
        }

        let mut params = query.to_params();
        params.push(("addRecipeInformation", "true".to_owned()));
        params.push(("fillIngredients", "true".to_owned()));
        params.push(("addRecipeNutrition", "true".to_owned()));

        match self
            .get_json::<ComplexSearchResponse>("/recipes/complexSearch", &params, "complex search")
            .await
        {
            Ok(response) => response.results.into_iter().map(Recipe::from_raw).collect(),
            Err(err) => {
                warn!(error = %err, "search_complex failed, serving samples");
                self.sample_recipes(count).await
            }
        }
    }

    /// Most-liked recipes first; thin wrapper over [`Self::search_complex`]
    pub async fn popular_recipes(&self, count: usize) -> Vec<Recipe> {
        self.search_complex(&popular_query(count)).await
    }

    /// Recipes for one meal type (breakfast, lunch, dinner, dessert, ...);
    /// thin wrapper over [`Self::search_complex`]
    pub async fn recipes_by_meal_type(&self, meal_type: &str, count: usize) -> Vec<Recipe> {
        let query = ComplexSearchQuery {
            meal_type: Some(meal_type.to_owned()),
            number: Some(count as u32),
            ..ComplexSearchQuery::default()
        };
        self.search_complex(&query).await
    }

    /// Find recipes using the caller's pantry, ranked by how many of the
    /// given ingredients each recipe uses (completion percentage breaks
    /// ties).
    ///
    /// Ingredient names should already be lowercased and deduplicated by the
    /// caller. On fallback, samples carry placeholder used/missed ingredients
    /// so the shape stays consistent; the match fields are approximate there.
    ///
    /// # Errors
    /// Returns [`RecipeApiError::InvalidQuery`] when `ingredients` is empty.
    pub async fn search_by_ingredients(
        &self,
        ingredients: &[String],
        count: usize,
    ) -> RecipeResult<Vec<MatchedRecipe>> {
        if ingredients.is_empty() {
            return Err(RecipeApiError::invalid_query(
                "ingredient list must not be empty",
            ));
        }

        if !self.has_usable_credentials() {
            debug!("search_by_ingredients: no usable credentials, serving samples");
            return Ok(self.annotated_samples(count).await);
        }

        let params = vec![
            ("ingredients", ingredients.join(",")),
            ("number", count.to_string()),
        ];

        match self
            .get_json::<Vec<RawIngredientMatch>>(
                "/recipes/findByIngredients",
                &params,
                "ingredient search",
            )
            .await
        {
            Ok(raw_matches) => Ok(score_ingredient_matches(raw_matches)),
            Err(err) => {
                warn!(error = %err, "search_by_ingredients failed, serving samples");
                Ok(self.annotated_samples(count).await)
            }
        }
    }

    /// Find recipes within nutrient bounds.
    ///
    /// Bounds are validated before any I/O. Fallback serves unfiltered
    /// samples; the bounds are not applied locally.
    ///
    /// # Errors
    /// Returns [`RecipeApiError::InvalidQuery`] when any min/max pair is
    /// inverted.
    pub async fn search_by_nutrients(
        &self,
        bounds: &NutrientBounds,
    ) -> RecipeResult<Vec<Recipe>> {
        bounds.validate()?;

        if !self.has_usable_credentials() {
            debug!("search_by_nutrients: no usable credentials, serving samples");
            return Ok(self.sample_recipes(DEFAULT_RANDOM_COUNT).await);
        }

        let params = nutrient_search_params(bounds);

        match self
            .get_json::<Vec<RawRecipe>>("/recipes/findByNutrients", &params, "nutrient search")
            .await
        {
            Ok(raw) => Ok(raw.into_iter().map(Recipe::from_raw).collect()),
            Err(err) => {
                warn!(error = %err, "search_by_nutrients failed, serving samples");
                Ok(self.sample_recipes(DEFAULT_RANDOM_COUNT).await)
            }
        }
    }

    /// Fetch full detail (nutrition and step-level instructions included)
    /// for one recipe.
    ///
    /// Without credentials the catalog is consulted: an exact id match when
    /// present, otherwise the first catalog entry — so the returned id may
    /// differ from the requested one when running offline. Against the live
    /// API a missing id propagates as [`RecipeApiError::NotFound`]; other
    /// failures fall back to the catalog.
    ///
    /// # Errors
    /// Returns [`RecipeApiError::NotFound`] when the live API has no recipe
    /// with this id.
    pub async fn recipe_detail(&self, id: u64) -> RecipeResult<Recipe> {
        if !self.has_usable_credentials() {
            debug!(id, "recipe_detail: no usable credentials, serving sample");
            return Ok(self.detail_from_catalog(id));
        }

        let path = format!("/recipes/{id}/information");
        let params = vec![("includeNutrition", "true".to_owned())];
        match self
            .get_json::<RawRecipe>(&path, &params, "recipe detail")
            .await
        {
            Ok(raw) => Ok(Recipe::from_raw(raw)),
            Err(err) => {
                let err = classify_detail_error(err, id);
                if err.is_recoverable() {
                    warn!(error = %err, id, "recipe_detail failed, serving sample");
                    Ok(self.detail_from_catalog(id))
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Catalog lookup for the detail fallback: exact id, else first entry,
    /// else a bare defaulted record for an empty catalog
    fn detail_from_catalog(&self, id: u64) -> Recipe {
        self.catalog
            .find_by_id(id)
            .or_else(|| self.catalog.first())
            .cloned()
            .unwrap_or_else(|| Recipe::from_raw(RawRecipe { id, ..RawRecipe::default() }))
    }

    /// Samples annotated with placeholder match fields so ingredient-search
    /// fallback results keep the [`MatchedRecipe`] shape
    async fn annotated_samples(&self, count: usize) -> Vec<MatchedRecipe> {
        let placeholder_used = vec![Ingredient {
            name: "sample ingredient".to_owned(),
            ..Ingredient::default()
        }];
        let placeholder_missed = vec![Ingredient {
            name: "missing ingredient".to_owned(),
            ..Ingredient::default()
        }];

        self.sample_recipes(count)
            .await
            .into_iter()
            .map(|recipe| MatchedRecipe {
                recipe,
                match_count: placeholder_used.len(),
                total_ingredients: placeholder_used.len() + placeholder_missed.len(),
                match_percentage: match_percentage(
                    placeholder_used.len(),
                    placeholder_used.len() + placeholder_missed.len(),
                ),
                used_ingredient_names: placeholder_used.iter().map(|i| i.name.clone()).collect(),
                missed_ingredient_names: placeholder_missed
                    .iter()
                    .map(|i| i.name.clone())
                    .collect(),
            })
            .collect()
    }

    /// Issue a GET to `path` with `params` plus the API key, decoding the
    /// JSON body into `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        context: &'static str,
    ) -> RecipeResult<T> {
        let url = format!("{}{path}", self.config.base_url);
        debug!(%url, context, "recipe API request");

        let api_key = self.config.api_key.clone().unwrap_or_default();
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("apiKey", api_key)])
            .send()
            .await
            .map_err(|source| RecipeApiError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeApiError::ApiStatus { status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| RecipeApiError::Decode { context, source })
    }
}

/// Query for the popularity feed: most-liked first
fn popular_query(count: usize) -> ComplexSearchQuery {
    ComplexSearchQuery {
        sort: Some("popularity".to_owned()),
        sort_direction: Some("desc".to_owned()),
        number: Some(count as u32),
        ..ComplexSearchQuery::default()
    }
}

/// Parameters for the find-by-nutrients request: the caller's bounds plus
/// inline recipe information and nutrition, so results render without a
/// follow-up detail fetch per card
fn nutrient_search_params(bounds: &NutrientBounds) -> Vec<(&'static str, String)> {
    let mut params = bounds.to_params();
    params.push(("number", DEFAULT_PAGE_SIZE.to_string()));
    params.push(("addRecipeInformation", "true".to_owned()));
    params.push(("addRecipeNutrition", "true".to_owned()));
    params
}

/// Classify a detail-fetch failure: a live 404 becomes the typed
/// [`RecipeApiError::NotFound`] the caller must handle, everything else keeps
/// its recoverable classification and routes to the catalog fallback
fn classify_detail_error(err: RecipeApiError, id: u64) -> RecipeApiError {
    match err {
        RecipeApiError::ApiStatus { status } if status == StatusCode::NOT_FOUND => {
            RecipeApiError::NotFound { id }
        }
        other => other,
    }
}
