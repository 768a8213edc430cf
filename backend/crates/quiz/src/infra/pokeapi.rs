//! PokeAPI Catalog Client
//!
//! Rate-limited, memoizing client for `GET {base}/pokemon/{id}`.
//!
//! Order of operations for every lookup:
//! 1. the sliding window is checked (a full window rejects even cache hits),
//! 2. the lookup cache is consulted,
//! 3. on a miss a slot is taken in the window and one request is sent.
//!
//! Only successful lookups are cached. Concurrent misses for the same id may
//! each hit the network.

use crate::application::config::QuizConfig;
use crate::domain::entities::Pokemon;
use crate::domain::repository::CatalogRepository;
use crate::domain::services::draw_pokemon_id;
use crate::domain::value_objects::{MaxPokemonId, PokemonId};
use crate::error::{QuizError, QuizResult};
use moka::sync::Cache;
use platform::client::{TransportFailure, build_http_client, classify};
use platform::rate_limit::{RateLimitResult, SlidingWindowLimiter};
use reqwest::StatusCode;
use std::sync::Arc;

/// RateLimitedCatalogClient backed by PokeAPI
#[derive(Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    limiter: Arc<SlidingWindowLimiter>,
    cache: Cache<u32, Pokemon>,
}

impl PokeApiClient {
    pub fn new(config: &QuizConfig) -> QuizResult<Self> {
        let http = build_http_client(&config.http_client_config())?;

        let mut cache = Cache::builder().max_capacity(config.cache_capacity);
        if let Some(ttl) = config.cache_ttl {
            cache = cache.time_to_live(ttl);
        }

        Ok(Self {
            http,
            base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
            limiter: Arc::new(SlidingWindowLimiter::new(config.rate_limit_config())),
            cache: cache.build(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn rate_limiter(&self) -> &SlidingWindowLimiter {
        &self.limiter
    }

    /// Number of memoized records
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    fn rate_limit_error(&self, result: &RateLimitResult) -> QuizError {
        let config = self.limiter.config();
        tracing::warn!(
            max_requests = config.max_requests,
            window_secs = config.window.as_secs(),
            retry_after_ms = result.retry_after.map(|d| d.as_millis() as u64),
            "Local PokeAPI rate limit exceeded"
        );
        QuizError::RateLimitExceeded(format!(
            "Rate limit of {} requests per {} seconds exceeded",
            config.max_requests,
            config.window.as_secs()
        ))
    }

    async fn request(&self, endpoint: &str) -> QuizResult<Pokemon> {
        let admission = self.limiter.try_acquire();
        if !admission.allowed {
            return Err(self.rate_limit_error(&admission));
        }

        let response = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, classify(&e)))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(endpoint = %endpoint, "PokeAPI rate limit exceeded");
            return Err(TransportFailure::Status(status.as_u16()).into());
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(transport_error(
                endpoint,
                TransportFailure::Status(status.as_u16()),
            ));
        }

        response.json::<Pokemon>().await.map_err(|e| {
            let failure = match classify(&e) {
                TransportFailure::Timeout => TransportFailure::Timeout,
                _ => TransportFailure::Other(e.to_string()),
            };
            transport_error(endpoint, failure)
        })
    }
}

fn transport_error(endpoint: &str, failure: TransportFailure) -> QuizError {
    match &failure {
        TransportFailure::Timeout => {
            tracing::error!("Request to {} timed out", endpoint);
        }
        TransportFailure::Connect => {
            tracing::error!("Connection error while accessing {}", endpoint);
        }
        TransportFailure::Status(status) => {
            tracing::error!(endpoint = %endpoint, status = status, "HTTP error occurred");
        }
        TransportFailure::Other(msg) => {
            tracing::error!(endpoint = %endpoint, error = %msg, "Unexpected error occurred");
        }
    }
    failure.into()
}

impl CatalogRepository for PokeApiClient {
    async fn fetch_by_id(&self, id: PokemonId) -> QuizResult<Pokemon> {
        let check = self.limiter.check();
        if !check.allowed {
            return Err(self.rate_limit_error(&check));
        }

        if let Some(pokemon) = self.cache.get(&id.get()) {
            tracing::debug!(pokemon_id = %id, "Cache hit");
            return Ok(pokemon);
        }

        let endpoint = format!("{}/pokemon/{}", self.base_url, id);
        let pokemon = self.request(&endpoint).await?;
        self.cache.insert(id.get(), pokemon.clone());

        tracing::debug!(pokemon_id = %id, name = %pokemon.name, "Fetched pokemon");
        Ok(pokemon)
    }

    async fn fetch_random(&self, max_id: MaxPokemonId) -> QuizResult<Pokemon> {
        let id = draw_pokemon_id(max_id);
        self.fetch_by_id(id).await
    }

    fn clear_cache(&self) {
        self.cache.invalidate_all();
        tracing::info!("Cache cleared");
    }
}
