//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Pokemon, QuizRound, Verification)
//! - Domain value objects (PokemonId, MaxPokemonId)
//! - Domain services (guess checking, answer shuffling, id draws)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
