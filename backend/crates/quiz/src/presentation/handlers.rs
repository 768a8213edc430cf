//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::config::QuizConfig;
use crate::application::{StartRoundUseCase, VerifyAnswerInput, VerifyAnswerUseCase};
use crate::domain::repository::{ArtworkRepository, CatalogRepository};
use crate::error::QuizResult;
use crate::presentation::dto::{RoundResponse, VerifyQuery, VerifyResponse};

/// Shared state for quiz handlers
pub struct QuizAppState<C, A>
where
    C: CatalogRepository + Send + Sync + 'static,
    A: ArtworkRepository + Send + Sync + 'static,
{
    pub catalog: Arc<C>,
    pub artwork: Arc<A>,
    pub config: Arc<QuizConfig>,
}

impl<C, A> Clone for QuizAppState<C, A>
where
    C: CatalogRepository + Send + Sync + 'static,
    A: ArtworkRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            artwork: self.artwork.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Random Round
// ============================================================================

/// GET /api/v1/pokemon/random
pub async fn random_round<C, A>(
    State(state): State<QuizAppState<C, A>>,
) -> QuizResult<Json<RoundResponse>>
where
    C: CatalogRepository + Send + Sync + 'static,
    A: ArtworkRepository + Send + Sync + 'static,
{
    let use_case = StartRoundUseCase::new(
        state.catalog.clone(),
        state.artwork.clone(),
        state.config.clone(),
    );

    let round = use_case.execute().await?;

    Ok(Json(round.into()))
}

// ============================================================================
// Verify
// ============================================================================

/// GET /api/v1/pokemon/verify?pokemon_id=&pokemon_answer_name=
pub async fn verify_answer<C, A>(
    State(state): State<QuizAppState<C, A>>,
    Query(query): Query<VerifyQuery>,
) -> QuizResult<Json<VerifyResponse>>
where
    C: CatalogRepository + Send + Sync + 'static,
    A: ArtworkRepository + Send + Sync + 'static,
{
    let use_case = VerifyAnswerUseCase::new(state.catalog.clone(), state.artwork.clone());

    let input = VerifyAnswerInput {
        pokemon_id: query.pokemon_id,
        guess: query.pokemon_answer_name,
    };

    let verification = use_case.execute(input).await?;

    Ok(Json(verification.into()))
}
