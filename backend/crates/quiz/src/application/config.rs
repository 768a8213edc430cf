//! Application Configuration
//!
//! Configuration for the quiz application layer.

use crate::domain::value_objects::MaxPokemonId;
use platform::client::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, HttpClientConfig};
use platform::rate_limit::RateLimitConfig;
use std::str::FromStr;
use std::time::Duration;

/// Default catalog base URL
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Quiz application configuration
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Catalog base URL, without trailing slash
    pub catalog_base_url: String,
    /// Rate limit: max catalog calls per window
    pub rate_limit_max_requests: u32,
    /// Rate limit window
    pub rate_limit_window: Duration,
    /// Lookup cache max entries
    pub cache_capacity: u64,
    /// Lookup cache entry lifetime (`None` = entries never expire)
    pub cache_ttl: Option<Duration>,
    /// Per-request timeout for catalog and artwork calls
    pub request_timeout: Duration,
    /// User-Agent sent to the catalog and artwork host
    pub user_agent: String,
    /// Upper bound for random draws
    pub max_pokemon_id: MaxPokemonId,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            rate_limit_max_requests: 50,
            rate_limit_window: Duration::from_secs(60),
            cache_capacity: 1000,
            cache_ttl: Some(Duration::from_secs(1800)),
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pokemon_id: MaxPokemonId::DEFAULT,
        }
    }
}

impl QuizConfig {
    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let catalog_base_url = lookup("POKEAPI_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.catalog_base_url);

        let cache_ttl = match parse_var::<u64>(&lookup, "POKEAPI_CACHE_TTL_SECS") {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.cache_ttl,
        };

        let max_pokemon_id = parse_var::<i64>(&lookup, "QUIZ_MAX_POKEMON_ID")
            .and_then(|raw| match MaxPokemonId::new(raw) {
                Ok(max) => Some(max),
                Err(e) => {
                    tracing::warn!(value = raw, error = %e, "Ignoring QUIZ_MAX_POKEMON_ID");
                    None
                }
            })
            .unwrap_or(defaults.max_pokemon_id);

        Self {
            catalog_base_url,
            rate_limit_max_requests: parse_var(&lookup, "POKEAPI_RATE_LIMIT")
                .unwrap_or(defaults.rate_limit_max_requests),
            rate_limit_window: parse_var(&lookup, "POKEAPI_RATE_LIMIT_WINDOW_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_window),
            cache_capacity: parse_var(&lookup, "POKEAPI_CACHE_CAPACITY")
                .unwrap_or(defaults.cache_capacity),
            cache_ttl,
            request_timeout: parse_var(&lookup, "POKEAPI_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            user_agent: defaults.user_agent,
            max_pokemon_id,
        }
    }

    pub fn rate_limit_config(&self) -> RateLimitConfig {
        RateLimitConfig {
            max_requests: self.rate_limit_max_requests,
            window: self.rate_limit_window,
        }
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.request_timeout,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key = key, value = %raw, "Invalid configuration value, using default");
            None
        }
    }
}
