//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{QuizRound, Verification};

// ============================================================================
// Random Round
// ============================================================================

/// Round response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResponse {
    /// Pokemon id, rendered as a string
    pub id: String,
    /// Base64 PNG silhouette
    pub silhouette: String,
    pub answers: Vec<String>,
}

impl From<QuizRound> for RoundResponse {
    fn from(round: QuizRound) -> Self {
        Self {
            id: round.id.to_string(),
            silhouette: round.silhouette,
            answers: round.answers,
        }
    }
}

// ============================================================================
// Verify
// ============================================================================

/// Verify query string
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    pub pokemon_id: i64,
    pub pokemon_answer_name: String,
}

/// Verify response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub name: String,
    /// Base64 PNG of the full artwork
    pub image: String,
    pub is_correct: bool,
}

impl From<Verification> for VerifyResponse {
    fn from(verification: Verification) -> Self {
        Self {
            name: verification.name,
            image: verification.image,
            is_correct: verification.is_correct,
        }
    }
}
