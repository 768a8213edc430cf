//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! `start_round` and `verify_answer` together form the quiz orchestrator.

pub mod config;
pub mod start_round;
pub mod verify_answer;

pub use config::QuizConfig;
pub use start_round::StartRoundUseCase;
pub use verify_answer::{VerifyAnswerInput, VerifyAnswerUseCase};
