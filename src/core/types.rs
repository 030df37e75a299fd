//! Shared data types for score state and leaderboard submission.

use super::error::TransportError;

/// Snapshot of the state held by a [`ScoreStore`](crate::score::ScoreStore).
///
/// Scores are unsigned by construction: a negative score is a programming
/// error upstream and is unrepresentable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreState {
    /// Points earned in the current game instance. Resets per play.
    pub score: u32,

    /// Best score observed in this process lifetime. Never decreases.
    #[cfg_attr(feature = "serde", serde(rename = "highScore"))]
    pub high_score: u32,
}

/// A validated leaderboard submission.
///
/// Built only after the eligibility rule and local name validation have
/// passed; consumed exactly once by a
/// [`LeaderboardClient`](super::LeaderboardClient).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmissionRequest {
    /// Player identifier entered on the game-over screen. Non-empty.
    #[cfg_attr(feature = "serde", serde(rename = "playerName"))]
    pub player_name: String,

    /// Score being submitted for ranking.
    pub score: u32,
}

/// Outcome of a leaderboard submission, as reported by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmissionResult {
    /// The board accepted the entry and assigned a rank.
    Accepted {
        /// 1-based position on the board, best score first.
        rank: u32,
    },

    /// The board declined the entry for a business reason.
    Rejected {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// The board could not be reached.
    Failed {
        /// Underlying transport condition.
        error: TransportError,
    },
}

impl SubmissionResult {
    /// Check if the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
