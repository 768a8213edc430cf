//! Domain Value Objects
//!
//! Immutable value types for the quiz domain.

use crate::error::{QuizError, QuizResult};
use kernel::id::Id;
use std::num::NonZeroU32;

/// Marker for catalog creature IDs
pub enum PokemonMarker {}

/// Catalog primary key (>= 1)
pub type PokemonId = Id<PokemonMarker>;

/// Validate a raw id coming from a caller
pub fn parse_pokemon_id(raw: i64) -> QuizResult<PokemonId> {
    PokemonId::new(raw)
        .map_err(|_| QuizError::Validation("Pokemon ID must be a positive integer".to_string()))
}

/// Upper bound (inclusive) for random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxPokemonId(NonZeroU32);

impl MaxPokemonId {
    /// Last species of generation 8 (898)
    pub const DEFAULT: MaxPokemonId = MaxPokemonId(NonZeroU32::MIN.saturating_add(897));

    pub fn new(raw: i64) -> QuizResult<Self> {
        u32::try_from(raw)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| {
                QuizError::Validation("Maximum Pokemon ID must be a positive integer".to_string())
            })
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl Default for MaxPokemonId {
    fn default() -> Self {
        Self::DEFAULT
    }
}
