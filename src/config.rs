// ABOUTME: Environment-driven configuration for the Spoonacular API client
// ABOUTME: Holds credentials, base URL, timeouts, and the credential sanity predicate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client configuration loaded from environment variables.
//!
//! A missing or placeholder API key is not an error: it routes every call
//! through the sample-data fallback instead of attempting a doomed request.

use std::env;
use tracing::debug;

/// Placeholder value shipped in example env files; never a real credential
const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Minimum plausible length for a real Spoonacular API key
const MIN_API_KEY_LEN: usize = 10;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default simulated latency for the sample-data fallback, in milliseconds.
/// Non-zero so callers exercise the same loading-state path as live calls.
const DEFAULT_FALLBACK_LATENCY_MS: u64 = 500;

/// Spoonacular API client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularConfig {
    /// API key (free from <https://spoonacular.com/food-api>); `None` when unset
    pub api_key: Option<String>,
    /// Base URL for the API (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Simulated latency applied before serving fallback data, in milliseconds
    pub fallback_latency_ms: u64,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.spoonacular.com".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_latency_ms: DEFAULT_FALLBACK_LATENCY_MS,
        }
    }
}

impl SpoonacularConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("SPOONACULAR_API_KEY").ok(),
            base_url: env_var_or("SPOONACULAR_BASE_URL", "https://api.spoonacular.com"),
            timeout_secs: env::var("SPOONACULAR_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            fallback_latency_ms: env::var("SPOONACULAR_FALLBACK_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FALLBACK_LATENCY_MS),
        }
    }

    /// True only when a configured API key looks usable: present, longer than
    /// a minimal sanity threshold, and not the documented placeholder.
    ///
    /// Pure predicate apart from a redacted diagnostic log line.
    #[must_use]
    pub fn has_usable_credentials(&self) -> bool {
        let usable = self
            .api_key
            .as_deref()
            .is_some_and(|key| key.len() > MIN_API_KEY_LEN && key != PLACEHOLDER_API_KEY);
        let key_prefix = self
            .api_key
            .as_deref()
            .map_or_else(|| "<unset>".to_owned(), redact_key);
        debug!(
            %key_prefix,
            key_len = self.api_key.as_deref().map_or(0, str::len),
            usable,
            "credential check"
        );
        usable
    }
}

/// Read an environment variable with a fallback default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// First few characters of a key for diagnostics, never the full value
fn redact_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    format!("{prefix}...")
}
