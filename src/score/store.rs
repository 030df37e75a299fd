//! Session-scoped score state store.

use std::sync::{Arc, RwLock};

use crate::core::ScoreState;

/// Holder of the current score and the best score observed this session.
///
/// The store is a cloneable handle over shared state so the game loop, the
/// view, and the submission workflow can all observe the same values. All
/// mutation is driven by sequential game/UI events; the internal lock only
/// enables the shared handle and is never held across an await point.
///
/// Lifecycle: constructed at session start with both values at zero (or an
/// externally persisted high-score seed). The game loop writes the score
/// during play and resets it between games; the high score moves only
/// through [`reconcile_high_score`](Self::reconcile_high_score) and never
/// decreases within the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    inner: Arc<RwLock<ScoreState>>,
}

impl ScoreStore {
    /// Create a fresh store with score and high score at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an externally persisted high score.
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScoreState {
                score: 0,
                high_score,
            })),
        }
    }

    /// Get the current snapshot. No side effects.
    pub fn get(&self) -> ScoreState {
        *self.inner.read().expect("score store lock poisoned")
    }

    /// Replace the current score. The high score is untouched.
    pub fn set_score(&self, score: u32) {
        self.inner.write().expect("score store lock poisoned").score = score;
    }

    /// Start a new game: score back to zero, high score untouched.
    pub fn reset(&self) {
        self.set_score(0);
    }

    /// Raise the high score to `candidate` if it is an improvement.
    ///
    /// Idempotent and monotonic: after any sequence of calls the high score
    /// equals the maximum of all candidates and the initial value.
    pub fn reconcile_high_score(&self, candidate: u32) {
        let mut state = self.inner.write().expect("score store lock poisoned");
        state.high_score = state.high_score.max(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_is_zeroed() {
        let store = ScoreStore::new();
        assert_eq!(store.get(), ScoreState::default());
    }

    #[test]
    fn test_set_score_read_after_write() {
        let store = ScoreStore::new();
        for s in [0, 1, 18, 9999, u32::MAX] {
            store.set_score(s);
            assert_eq!(store.get().score, s);
        }
    }

    #[test]
    fn test_set_score_does_not_touch_high_score() {
        let store = ScoreStore::with_high_score(50);
        store.set_score(18);
        assert_eq!(store.get().score, 18);
        assert_eq!(store.get().high_score, 50);
    }

    #[test]
    fn test_reset_preserves_high_score() {
        let store = ScoreStore::new();
        store.set_score(18);
        store.reconcile_high_score(18);
        store.reset();

        assert_eq!(store.get().score, 0);
        assert_eq!(store.get().high_score, 18);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let store = ScoreStore::new();
        store.reconcile_high_score(42);
        let once = store.get().high_score;
        store.reconcile_high_score(42);

        assert_eq!(store.get().high_score, once);
        assert_eq!(once, 42);
    }

    #[test]
    fn test_reconcile_is_monotonic() {
        let store = ScoreStore::with_high_score(10);
        for candidate in [5, 30, 7, 30, 12] {
            store.reconcile_high_score(candidate);
        }
        // max of seed and all candidates
        assert_eq!(store.get().high_score, 30);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ScoreStore::new();
        let other = store.clone();

        store.set_score(18);
        assert_eq!(other.get().score, 18);

        other.reconcile_high_score(18);
        assert_eq!(store.get().high_score, 18);
    }
}
