//! Verify Answer Use Case

use crate::domain::entities::Verification;
use crate::domain::repository::{ArtworkRepository, CatalogRepository};
use crate::domain::services::is_correct_guess;
use crate::domain::value_objects::parse_pokemon_id;
use crate::error::{QuizError, QuizResult};
use platform::silhouette::encode_base64;
use std::sync::Arc;

/// Input DTO for verify answer
#[derive(Debug, Clone)]
pub struct VerifyAnswerInput {
    /// Raw id as supplied by the caller; validated here
    pub pokemon_id: i64,
    pub guess: String,
}

/// Verify Answer Use Case
pub struct VerifyAnswerUseCase<C, A>
where
    C: CatalogRepository,
    A: ArtworkRepository,
{
    catalog: Arc<C>,
    artwork: Arc<A>,
}

impl<C, A> VerifyAnswerUseCase<C, A>
where
    C: CatalogRepository,
    A: ArtworkRepository,
{
    pub fn new(catalog: Arc<C>, artwork: Arc<A>) -> Self {
        Self { catalog, artwork }
    }

    pub async fn execute(&self, input: VerifyAnswerInput) -> QuizResult<Verification> {
        let pokemon_id = parse_pokemon_id(input.pokemon_id)?;

        tracing::info!(pokemon_id = %pokemon_id, "Verifying answer");
        let pokemon = self
            .catalog
            .fetch_by_id(pokemon_id)
            .await
            .map_err(|e| match e {
                QuizError::UpstreamHttp { status: 404 } => {
                    QuizError::NotFound(format!("no Pokemon with id {}", pokemon_id))
                }
                other => other,
            })?;

        let is_correct = is_correct_guess(&input.guess, &pokemon.name);

        let artwork_url = pokemon.require_artwork_url()?;
        let artwork = self.artwork.fetch_artwork(artwork_url).await?;

        tracing::debug!(pokemon_id = %pokemon_id, "Encoding image");
        let image = encode_base64(&artwork)?;

        tracing::info!(pokemon_id = %pokemon_id, is_correct, "Answer verified");

        Ok(Verification {
            name: pokemon.name,
            image,
            is_correct,
        })
    }
}
