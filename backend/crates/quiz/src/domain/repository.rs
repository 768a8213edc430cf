//! Repository Traits
//!
//! Interfaces for catalog and artwork access. Implementations are in the
//! infrastructure layer.

use crate::domain::entities::Pokemon;
use crate::domain::value_objects::{MaxPokemonId, PokemonId};
use crate::error::QuizResult;

/// Catalog repository trait
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// Look up one record by id
    async fn fetch_by_id(&self, id: PokemonId) -> QuizResult<Pokemon>;

    /// Look up a record drawn uniformly from `[1, max_id]`
    async fn fetch_random(&self, max_id: MaxPokemonId) -> QuizResult<Pokemon>;

    /// Drop every memoized record
    fn clear_cache(&self);
}

/// Artwork repository trait
#[trait_variant::make(ArtworkRepository: Send)]
pub trait LocalArtworkRepository {
    /// Download raw image bytes
    async fn fetch_artwork(&self, url: &str) -> QuizResult<Vec<u8>>;
}
