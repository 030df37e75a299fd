//! Error types for the game-over screen core.

use thiserror::Error;

/// Local input validation failures.
///
/// These are rejected before any request is built and never reach the
/// leaderboard client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Player name is empty or whitespace only.
    #[error("player name must not be empty")]
    EmptyPlayerName,

    /// Player name exceeds the configured length limit.
    #[error("player name too long: {actual} characters, maximum {max}")]
    PlayerNameTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Actual length of the rejected name.
        actual: usize,
    },
}

/// Transport-level submission failures.
///
/// Ordinary leaderboard rejections (validation failure, duplicate name,
/// etc.) are NOT transport errors; clients map those to
/// [`SubmissionResult::Rejected`](super::SubmissionResult::Rejected).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportError {
    /// The leaderboard endpoint could not be reached.
    #[error("leaderboard unreachable: {0}")]
    Unreachable(String),

    /// The submission did not complete within the configured deadline.
    #[error("submission timed out")]
    Timeout,
}
