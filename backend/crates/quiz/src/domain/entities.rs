//! Domain Entities
//!
//! Core business entities for the quiz domain.

use crate::domain::value_objects::PokemonId;
use crate::error::{QuizError, QuizResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key of the "official artwork" sprite set under `sprites.other`
pub const OFFICIAL_ARTWORK: &str = "official-artwork";

/// Number of wrong answers offered per round
pub const DECOY_COUNT: usize = 3;

/// Pokemon entity - one creature record as served by the catalog
///
/// Immutable once fetched. Fields the quiz does not use are ignored on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
}

/// Sprite URLs; opaque strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: HashMap<String, SpriteSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Pokemon {
    /// URL of `sprites.other["official-artwork"].front_default`
    pub fn official_artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .get(OFFICIAL_ARTWORK)
            .and_then(|set| set.front_default.as_deref())
    }

    /// Like [`Pokemon::official_artwork_url`], but a missing URL is an error
    pub fn require_artwork_url(&self) -> QuizResult<&str> {
        self.official_artwork_url().ok_or_else(|| {
            tracing::error!(pokemon_id = %self.id, "Catalog record has no official artwork");
            QuizError::UpstreamUnexpected(format!("Pokemon {} has no official artwork", self.id))
        })
    }
}

/// QuizRound - one playable round, never persisted
#[derive(Debug, Clone)]
pub struct QuizRound {
    pub id: PokemonId,
    /// Base64 PNG silhouette of the correct answer
    pub silhouette: String,
    /// Correct name plus decoys, shuffled
    pub answers: Vec<String>,
}

/// Verification - outcome of a guess, never persisted
#[derive(Debug, Clone)]
pub struct Verification {
    pub name: String,
    /// Base64 PNG of the full artwork
    pub image: String,
    pub is_correct: bool,
}
