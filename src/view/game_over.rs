//! Game-over screen binding.

use crate::core::{
    SCORE_TEXT_PREFIX, SUBMIT_BUTTON_ID, SUBMIT_BUTTON_LABEL, TEXT_HIGHSCORE_ID, TEXT_SCORE_ID,
};
use crate::score::{ScoreStore, is_eligible_for_submission};

use super::screen::Screen;

/// Presentation surface of the game-over screen.
///
/// Binds the score display to [`ScoreStore::get`], the high-score display
/// to the stored high score, and the submission control to the eligibility
/// rule. Interaction with the submission control is delegated to the
/// submission workflow; the view itself performs no business logic.
#[derive(Debug, Clone)]
pub struct GameOverView {
    store: ScoreStore,
}

impl GameOverView {
    /// Bind a view to a score store.
    pub fn new(store: ScoreStore) -> Self {
        Self { store }
    }

    /// Render the current screen.
    ///
    /// The identifiers and text formats are the bit-exact contract with the
    /// display harness:
    ///
    /// - `text-score`: `"yourScore: {score}"`
    /// - `text-highscore`: `"{highScore}"`
    /// - `submit-btn`: present iff the score is eligible, labeled `"Submit"`
    ///
    /// Eligibility is re-evaluated on every render, never cached.
    pub fn render(&self) -> Screen {
        let state = self.store.get();
        let mut screen = Screen::default();

        screen.push(TEXT_SCORE_ID, format!("{SCORE_TEXT_PREFIX}{}", state.score));
        screen.push(TEXT_HIGHSCORE_ID, state.high_score.to_string());
        if is_eligible_for_submission(state.score) {
            screen.push(SUBMIT_BUTTON_ID, SUBMIT_BUTTON_LABEL.to_string());
        }

        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_renders_zeros_without_submit() {
        let view = GameOverView::new(ScoreStore::new());
        let screen = view.render();

        assert_eq!(screen.fragment(TEXT_SCORE_ID), Some("yourScore: 0"));
        assert_eq!(screen.fragment(TEXT_HIGHSCORE_ID), Some("0"));
        assert!(!screen.has(SUBMIT_BUTTON_ID));
    }

    #[test]
    fn test_positive_score_shows_submit_control() {
        let store = ScoreStore::new();
        store.set_score(18);
        let screen = GameOverView::new(store).render();

        assert_eq!(screen.fragment(TEXT_SCORE_ID), Some("yourScore: 18"));
        assert_eq!(screen.fragment(SUBMIT_BUTTON_ID), Some("Submit"));
    }

    #[test]
    fn test_reset_hides_submit_despite_high_score() {
        let store = ScoreStore::with_high_score(120);
        store.set_score(18);
        store.reset();
        let screen = GameOverView::new(store).render();

        assert_eq!(screen.fragment(TEXT_SCORE_ID), Some("yourScore: 0"));
        assert_eq!(screen.fragment(TEXT_HIGHSCORE_ID), Some("120"));
        assert!(!screen.has(SUBMIT_BUTTON_ID));
    }

    #[test]
    fn test_render_tracks_store_updates() {
        let store = ScoreStore::new();
        let view = GameOverView::new(store.clone());

        store.set_score(7);
        assert_eq!(view.render().fragment(TEXT_SCORE_ID), Some("yourScore: 7"));

        store.reconcile_high_score(7);
        assert_eq!(view.render().fragment(TEXT_HIGHSCORE_ID), Some("7"));
    }
}
