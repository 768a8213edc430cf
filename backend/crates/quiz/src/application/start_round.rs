//! Start Round Use Case

use crate::application::config::QuizConfig;
use crate::domain::entities::{DECOY_COUNT, QuizRound};
use crate::domain::repository::{ArtworkRepository, CatalogRepository};
use crate::domain::services::shuffle_answers;
use crate::error::QuizResult;
use platform::silhouette::to_silhouette;
use std::sync::Arc;

/// Start Round Use Case
pub struct StartRoundUseCase<C, A>
where
    C: CatalogRepository,
    A: ArtworkRepository,
{
    catalog: Arc<C>,
    artwork: Arc<A>,
    config: Arc<QuizConfig>,
}

impl<C, A> StartRoundUseCase<C, A>
where
    C: CatalogRepository,
    A: ArtworkRepository,
{
    pub fn new(catalog: Arc<C>, artwork: Arc<A>, config: Arc<QuizConfig>) -> Self {
        Self {
            catalog,
            artwork,
            config,
        }
    }

    /// Pick a random Pokemon, three random decoys, and silhouette the artwork
    ///
    /// Decoys are not deduplicated against each other or against the
    /// correct answer.
    pub async fn execute(&self) -> QuizResult<QuizRound> {
        let max_id = self.config.max_pokemon_id;

        tracing::info!("Retrieving random pokemon");
        let correct = self.catalog.fetch_random(max_id).await?;

        tracing::info!("Retrieving randomised answer options");
        let mut answers = Vec::with_capacity(DECOY_COUNT + 1);
        for _ in 0..DECOY_COUNT {
            answers.push(self.catalog.fetch_random(max_id).await?.name);
        }
        answers.push(correct.name.clone());
        shuffle_answers(&mut answers);

        let artwork_url = correct.require_artwork_url()?;
        let artwork = self.artwork.fetch_artwork(artwork_url).await?;

        tracing::debug!(pokemon_id = %correct.id, "Creating silhouette");
        let silhouette = to_silhouette(&artwork)?;

        tracing::info!(pokemon_id = %correct.id, "Started quiz round");

        Ok(QuizRound {
            id: correct.id,
            silhouette,
            answers,
        })
    }
}
