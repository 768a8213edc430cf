//! Infrastructure Layer
//!
//! HTTP implementations of the catalog and artwork repositories.

pub mod artwork;
pub mod pokeapi;

pub use artwork::HttpArtworkFetcher;
pub use pokeapi::PokeApiClient;
