//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::QuizAppState;
pub use router::{quiz_router, quiz_router_generic};
