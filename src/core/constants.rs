//! Display-contract identifiers and submission limits.
//!
//! The identifiers and text formats are the interoperability contract with
//! the display harness and MUST NOT be changed.

use std::time::Duration;

// =============================================================================
// DISPLAY CONTRACT
// =============================================================================

/// Identifier of the current-score text fragment.
pub const TEXT_SCORE_ID: &str = "text-score";

/// Identifier of the high-score text fragment.
pub const TEXT_HIGHSCORE_ID: &str = "text-highscore";

/// Identifier of the leaderboard submission control.
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";

/// Label shown on the submission control.
pub const SUBMIT_BUTTON_LABEL: &str = "Submit";

/// Prefix of the current-score text (`"yourScore: {score}"`).
pub const SCORE_TEXT_PREFIX: &str = "yourScore: ";

// =============================================================================
// SUBMISSION LIMITS
// =============================================================================

/// Smallest score that qualifies for leaderboard submission.
pub const MIN_ELIGIBLE_SCORE: u32 = 1;

/// Maximum accepted player name length, in characters.
pub const MAX_PLAYER_NAME_LEN: usize = 32;

/// Default deadline for one leaderboard submission round-trip.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);
