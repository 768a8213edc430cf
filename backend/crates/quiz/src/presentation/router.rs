//! Quiz Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::QuizConfig;
use crate::domain::repository::{ArtworkRepository, CatalogRepository};
use crate::error::QuizResult;
use crate::infra::{HttpArtworkFetcher, PokeApiClient};
use crate::presentation::handlers::{self, QuizAppState};

/// Create the Quiz router backed by PokeAPI
pub fn quiz_router(config: QuizConfig) -> QuizResult<Router> {
    let catalog = PokeApiClient::new(&config)?;
    let artwork = HttpArtworkFetcher::new(&config)?;

    Ok(quiz_router_generic(catalog, artwork, config))
}

/// Create a Quiz router for any repository implementation
pub fn quiz_router_generic<C, A>(catalog: C, artwork: A, config: QuizConfig) -> Router
where
    C: CatalogRepository + Send + Sync + 'static,
    A: ArtworkRepository + Send + Sync + 'static,
{
    let state = QuizAppState {
        catalog: Arc::new(catalog),
        artwork: Arc::new(artwork),
        config: Arc::new(config),
    };

    Router::new()
        .route("/random", get(handlers::random_round::<C, A>))
        .route("/verify", get(handlers::verify_answer::<C, A>))
        .with_state(state)
}
