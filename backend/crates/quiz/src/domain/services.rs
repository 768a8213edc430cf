//! Domain Services
//!
//! Pure quiz logic.

use crate::domain::value_objects::{MaxPokemonId, PokemonId};
use rand::Rng;
use rand::seq::SliceRandom;
use std::num::NonZeroU32;

/// Case-insensitive comparison of a guess against the correct name
pub fn is_correct_guess(guess: &str, name: &str) -> bool {
    guess.to_lowercase() == name.to_lowercase()
}

/// Shuffle answer options uniformly at random
pub fn shuffle_answers(answers: &mut [String]) {
    answers.shuffle(&mut rand::rng());
}

/// Draw an id uniformly from `[1, max_id]`
pub fn draw_pokemon_id(max_id: MaxPokemonId) -> PokemonId {
    let offset = rand::rng().random_range(0..max_id.get());
    PokemonId::from_nonzero(NonZeroU32::MIN.saturating_add(offset))
}
