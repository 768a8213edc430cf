//! Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PokeAPI and artwork HTTP implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Random round: silhouette of a random Pokemon plus four shuffled answers
//! - Verify: case-insensitive guess check, returns the full artwork
//!
//! ## Catalog Access
//! - Outbound catalog calls pass a sliding-window rate limit (50 per 60 s by default)
//! - Successful lookups are memoized in a bounded cache with a TTL
//! - Artwork downloads are neither rate limited nor cached

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use presentation::router::{quiz_router, quiz_router_generic};
