//! # Endgame
//!
//! Client-side core of a game's "Game Over" screen: the score/high-score
//! state store, the rule deciding whether a score may be submitted to a
//! leaderboard, and the workflow that drives a submission from name entry
//! through the asynchronous leaderboard call. It provides:
//!
//! - **ScoreStore**: session-scoped score and high-score state with
//!   monotonic high-score reconciliation
//! - **Eligibility**: a pure, uncached predicate gating the submission
//!   control (a zero score is never submitted)
//! - **SubmissionWorkflow**: `Idle → Collecting → Submitting` phase machine
//!   with a duplicate-submit guard and a generation token that discards
//!   results arriving after the screen was dismissed
//! - **GameOverView**: identifier-keyed text fragments matching the display
//!   harness contract bit for bit
//!
//! Game simulation, rendering, routing, and cross-session persistence are
//! external collaborators; this crate is the decision logic between them.
//!
//! ## Feature Flags
//!
//! - `workflow` (default): Submission workflow (requires `tokio` for the
//!   deadline-wrapped convenience path)
//! - `view` (default): Presentation binding producing screen fragments
//! - `memory-client` (default): In-process reference leaderboard
//! - `serde` (default): Serde derives on the wire-adjacent types
//!
//! ## Modules
//!
//! - [`core`]: Shared types, the [`LeaderboardClient`] seam, constants, and
//!   error taxonomy (always included)
//! - [`score`]: Score store and eligibility rule (always included)
//! - [`submit`]: Submission workflow (requires `workflow` feature)
//! - [`view`]: Presentation binding (requires `view` feature)
//! - [`client`]: Reference leaderboard clients (requires `memory-client`
//!   feature)
//!
//! ## Example Usage
//!
//! ```rust
//! use endgame::prelude::*;
//!
//! let store = ScoreStore::new();
//! store.set_score(18);
//!
//! let view = GameOverView::new(store.clone());
//! let screen = view.render();
//!
//! assert_eq!(screen.fragment(TEXT_SCORE_ID), Some("yourScore: 18"));
//! assert_eq!(screen.fragment(TEXT_HIGHSCORE_ID), Some("0"));
//! assert_eq!(screen.fragment(SUBMIT_BUTTON_ID), Some("Submit"));
//! ```
//!
//! Driving a submission against a leaderboard:
//!
//! ```rust
//! use endgame::prelude::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = ScoreStore::new();
//! store.set_score(18);
//!
//! let board = MemoryLeaderboard::new();
//! let mut workflow = SubmissionWorkflow::new(store.clone());
//!
//! workflow.engage().unwrap();
//! let outcome = workflow.submit(&board, "ada").await.unwrap();
//!
//! assert_eq!(outcome, SubmissionOutcome::Accepted { rank: 1 });
//! assert_eq!(store.get().high_score, 18);
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Score layer (always included)
pub mod score;

// Submission workflow (feature-gated)
#[cfg(feature = "workflow")]
#[cfg_attr(docsrs, doc(cfg(feature = "workflow")))]
pub mod submit;

// Presentation binding (feature-gated)
#[cfg(feature = "view")]
#[cfg_attr(docsrs, doc(cfg(feature = "view")))]
pub mod view;

// Reference clients (feature-gated)
#[cfg(feature = "memory-client")]
#[cfg_attr(docsrs, doc(cfg(feature = "memory-client")))]
pub mod client;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types, trait, constants, errors
    pub use crate::core::*;

    // Score store and eligibility rule
    pub use crate::score::*;

    // Submission workflow (when enabled)
    #[cfg(feature = "workflow")]
    pub use crate::submit::*;

    // Presentation binding (when enabled)
    #[cfg(feature = "view")]
    pub use crate::view::*;

    // Reference clients (when enabled)
    #[cfg(feature = "memory-client")]
    pub use crate::client::*;
}

// Re-export commonly used items at crate root
pub use core::{
    LeaderboardClient, ScoreState, SubmissionRequest, SubmissionResult, TransportError,
    ValidationError,
};
pub use score::{ScoreStore, is_eligible_for_submission};

#[cfg(feature = "workflow")]
pub use submit::{
    PendingSubmission, SubmissionOutcome, SubmissionWorkflow, SubmitError, WorkflowConfig,
    WorkflowPhase,
};

#[cfg(feature = "view")]
pub use view::{GameOverView, Screen, TextFragment};

#[cfg(feature = "memory-client")]
pub use client::MemoryLeaderboard;
