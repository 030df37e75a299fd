//! Submission eligibility rule.

use crate::core::MIN_ELIGIBLE_SCORE;

/// Decide whether `score` qualifies for leaderboard submission.
///
/// Eligible iff `score > 0`: a zero score carries no ranking information
/// and must not clutter the board or prompt a network call. The predicate
/// is pure and never cached; callers re-evaluate it whenever the score
/// changes.
pub fn is_eligible_for_submission(score: u32) -> bool {
    score >= MIN_ELIGIBLE_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_is_not_eligible() {
        assert!(!is_eligible_for_submission(0));
    }

    #[test]
    fn test_boundary_score_is_eligible() {
        assert!(is_eligible_for_submission(1));
    }

    #[test]
    fn test_large_score_is_eligible() {
        assert!(is_eligible_for_submission(u32::MAX));
    }
}
