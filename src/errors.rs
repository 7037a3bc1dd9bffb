// ABOUTME: Error taxonomy for the recipe data client
// ABOUTME: Separates caller bugs (propagated) from environmental failures (absorbed by fallback)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for recipe API operations.
//!
//! Only two classes of error ever reach a caller of [`crate::client::RecipeClient`]:
//! [`RecipeApiError::InvalidQuery`] (a caller bug, rejected before any I/O) and
//! [`RecipeApiError::NotFound`] (a genuine miss against the live API, so the
//! presentation layer can render a distinct empty state). Transport failures,
//! bad statuses, and undecodable bodies are absorbed locally and masked by the
//! sample-data fallback; they exist as variants so the internal fetch path can
//! report *why* the fallback was taken.

use reqwest::StatusCode;

/// Errors produced by recipe API operations
#[derive(Debug, thiserror::Error)]
pub enum RecipeApiError {
    /// Caller-supplied query parameters are malformed
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Why the query was rejected
        reason: String,
    },

    /// The live API has no recipe with the requested id
    #[error("Recipe {id} not found")]
    NotFound {
        /// Recipe id that was requested
        id: u64,
    },

    /// Network-level failure reaching the API
    #[error("Transport error calling recipe API")]
    Transport {
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("Recipe API returned HTTP {status}")]
    ApiStatus {
        /// Status code from the response
        status: StatusCode,
    },

    /// The response body was not the JSON shape we expect
    #[error("Failed to decode recipe API response for {context}")]
    Decode {
        /// Which endpoint produced the body
        context: &'static str,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

impl RecipeApiError {
    /// Invalid query shorthand
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            reason: reason.into(),
        }
    }

    /// True for failures the client absorbs by serving fallback data
    /// rather than surfacing to the caller.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::ApiStatus { .. } | Self::Decode { .. } => true,
            Self::InvalidQuery { .. } | Self::NotFound { .. } => false,
        }
    }
}

/// Result type alias for recipe API operations
pub type RecipeResult<T> = Result<T, RecipeApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_classification() {
        assert!(RecipeApiError::ApiStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR
        }
        .is_recoverable());
        assert!(!RecipeApiError::invalid_query("minCalories > maxCalories").is_recoverable());
        assert!(!RecipeApiError::NotFound { id: 42 }.is_recoverable());
    }

    #[test]
    fn display_includes_detail() {
        let err = RecipeApiError::NotFound { id: 716_429 };
        assert_eq!(err.to_string(), "Recipe 716429 not found");

        let err = RecipeApiError::invalid_query("minFat > maxFat");
        assert!(err.to_string().contains("minFat > maxFat"));
    }
}
