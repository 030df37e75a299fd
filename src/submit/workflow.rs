//! Leaderboard submission workflow.
//!
//! Drives the submission control of the game-over screen through the
//! phases `Idle → Collecting → Submitting → Succeeded`. The `Submitting`
//! phase is the duplicate-submit guard: while a request is in flight no
//! second request can be started. A generation token discards results that
//! arrive after the screen was dismissed, so a stale completion never
//! mutates the store.
//!
//! The primary API is split-phase: [`SubmissionWorkflow::start_submission`]
//! produces a single-use [`PendingSubmission`], the caller runs the client
//! call, and [`SubmissionWorkflow::complete_submission`] applies exactly
//! one transition from the result. [`SubmissionWorkflow::submit`] wraps the
//! three steps with a configurable deadline for callers driving a client
//! directly.

use std::time::Duration;

use thiserror::Error;

use crate::core::{
    DEFAULT_SUBMIT_TIMEOUT, LeaderboardClient, MAX_PLAYER_NAME_LEN, SubmissionRequest,
    SubmissionResult, TransportError, ValidationError,
};
use crate::score::{ScoreStore, is_eligible_for_submission};

/// Errors raised locally by the workflow.
///
/// None of these involve the leaderboard client; an invalid submission is
/// rejected before any request is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The current score does not qualify for submission.
    #[error("score is not eligible for submission")]
    NotEligible,

    /// A submission is already in flight.
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    /// The workflow is not collecting a player name.
    #[error("no submission in progress")]
    NotCollecting,

    /// The player name failed local validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Workflow lifecycle phase.
///
/// A rejected or failed attempt surfaces its error through
/// [`SubmissionOutcome`] and drops straight back to `Collecting` so the
/// player can retry without re-engaging the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// No submission in progress.
    Idle,
    /// The player is entering a name.
    Collecting,
    /// A request is in flight; further submits are refused.
    Submitting,
    /// The board accepted the entry.
    Succeeded,
}

/// Outcome of one completed submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The entry was accepted; the high score has been reconciled.
    Accepted {
        /// 1-based rank assigned by the board.
        rank: u32,
    },

    /// Board-side rejection; the workflow is collecting again.
    Rejected {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// Transport failure; the workflow is collecting again.
    Failed {
        /// Underlying transport condition.
        error: TransportError,
    },

    /// The result arrived after dismissal and was discarded.
    Discarded,
}

/// Submission workflow configuration.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Deadline for one submission round-trip.
    pub submit_timeout: Duration,

    /// Maximum accepted player name length, in characters.
    pub max_player_name_len: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            max_player_name_len: MAX_PLAYER_NAME_LEN,
        }
    }
}

/// Builder for creating a [`WorkflowConfig`].
#[derive(Debug, Default)]
pub struct WorkflowConfigBuilder {
    config: WorkflowConfig,
}

impl WorkflowConfigBuilder {
    /// Create a new config builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the submission deadline.
    pub fn submit_timeout(mut self, timeout: Duration) -> Self {
        self.config.submit_timeout = timeout;
        self
    }

    /// Set the maximum player name length.
    pub fn max_player_name_len(mut self, len: usize) -> Self {
        self.config.max_player_name_len = len;
        self
    }

    /// Build the workflow configuration.
    pub fn build(self) -> WorkflowConfig {
        self.config
    }
}

/// Token for a single in-flight submission.
///
/// Returned by [`SubmissionWorkflow::start_submission`]. Hand
/// [`request`](Self::request) to a [`LeaderboardClient`] and feed the
/// result back through [`SubmissionWorkflow::complete_submission`], which
/// consumes the token: each request is used exactly once. The token is
/// deliberately not `Clone`, so a completed result cannot be replayed.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    request: SubmissionRequest,
    generation: u64,
}

impl PendingSubmission {
    /// The request to hand to the leaderboard client.
    pub fn request(&self) -> &SubmissionRequest {
        &self.request
    }
}

/// The leaderboard submission workflow.
///
/// Owns the phase machine and a clone of the shared [`ScoreStore`]. All
/// transitions happen on the UI/event thread in response to discrete
/// events; the only suspension point is the client call between
/// `start_submission` and `complete_submission`.
#[derive(Debug)]
pub struct SubmissionWorkflow {
    /// Shared score store handle.
    store: ScoreStore,

    /// Workflow configuration.
    config: WorkflowConfig,

    /// Current phase.
    phase: WorkflowPhase,

    /// Bumped on dismissal; in-flight results from an older generation are
    /// discarded instead of being applied to a stale store.
    generation: u64,
}

impl SubmissionWorkflow {
    /// Create a workflow over `store` with the default configuration.
    pub fn new(store: ScoreStore) -> Self {
        Self::with_config(store, WorkflowConfig::default())
    }

    /// Create a workflow over `store` with an explicit configuration.
    pub fn with_config(store: ScoreStore, config: WorkflowConfig) -> Self {
        Self {
            store,
            config,
            phase: WorkflowPhase::Idle,
            generation: 0,
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// Get the shared score store handle.
    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Engage the submission control: `Idle → Collecting`.
    ///
    /// Guarded by the eligibility rule; a zero score never opens the
    /// collection step. Engaging while already collecting is a no-op.
    pub fn engage(&mut self) -> Result<(), SubmitError> {
        if self.phase == WorkflowPhase::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !is_eligible_for_submission(self.store.get().score) {
            return Err(SubmitError::NotEligible);
        }
        self.phase = WorkflowPhase::Collecting;
        Ok(())
    }

    /// Begin a submission: `Collecting → Submitting`.
    ///
    /// Validates the player name and re-checks eligibility; both reject
    /// locally without contacting the leaderboard. While a request is in
    /// flight, further calls return [`SubmitError::AlreadySubmitting`] and
    /// produce no second request.
    pub fn start_submission(
        &mut self,
        player_name: &str,
    ) -> Result<PendingSubmission, SubmitError> {
        match self.phase {
            WorkflowPhase::Submitting => return Err(SubmitError::AlreadySubmitting),
            WorkflowPhase::Collecting => {}
            WorkflowPhase::Idle | WorkflowPhase::Succeeded => {
                return Err(SubmitError::NotCollecting);
            }
        }

        let score = self.store.get().score;
        if !is_eligible_for_submission(score) {
            return Err(SubmitError::NotEligible);
        }
        let player_name = self.validate_name(player_name)?;

        self.phase = WorkflowPhase::Submitting;
        tracing::debug!(player = %player_name, score, "submission started");

        Ok(PendingSubmission {
            request: SubmissionRequest { player_name, score },
            generation: self.generation,
        })
    }

    /// Apply the result of an in-flight submission.
    ///
    /// Exactly one transition per result:
    ///
    /// - a stale generation (the screen was dismissed while the request was
    ///   in flight) is discarded without touching store or phase
    /// - `Accepted(rank)` reconciles the high score and moves to
    ///   `Succeeded`
    /// - `Rejected`/`Failed` return to `Collecting` with no store mutation;
    ///   the outcome carries the surfaced error, never silently dropped
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: SubmissionResult,
    ) -> SubmissionOutcome {
        if pending.generation != self.generation {
            tracing::debug!(
                player = %pending.request.player_name,
                "stale submission result discarded"
            );
            return SubmissionOutcome::Discarded;
        }

        match result {
            SubmissionResult::Accepted { rank } => {
                self.store.reconcile_high_score(pending.request.score);
                self.phase = WorkflowPhase::Succeeded;
                tracing::info!(rank, score = pending.request.score, "submission accepted");
                SubmissionOutcome::Accepted { rank }
            }
            SubmissionResult::Rejected { reason } => {
                self.phase = WorkflowPhase::Collecting;
                tracing::warn!(%reason, "submission rejected");
                SubmissionOutcome::Rejected { reason }
            }
            SubmissionResult::Failed { error } => {
                self.phase = WorkflowPhase::Collecting;
                tracing::warn!(error = %error, "submission transport failure");
                SubmissionOutcome::Failed { error }
            }
        }
    }

    /// Dismiss the screen: back to `Idle`.
    ///
    /// Bumps the generation so a still-in-flight result is discarded when
    /// it eventually arrives.
    pub fn dismiss(&mut self) {
        self.phase = WorkflowPhase::Idle;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Run one full submission attempt against `client`.
    ///
    /// Convenience wrapper around the split-phase API: starts the
    /// submission, awaits the client under the configured deadline, and
    /// applies the result. Deadline expiry surfaces as
    /// [`SubmissionOutcome::Failed`] with [`TransportError::Timeout`].
    pub async fn submit<C: LeaderboardClient>(
        &mut self,
        client: &C,
        player_name: &str,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let pending = self.start_submission(player_name)?;

        let call = client.submit(pending.request().clone());
        let result = match tokio::time::timeout(self.config.submit_timeout, call).await {
            Ok(result) => result,
            Err(_) => SubmissionResult::Failed {
                error: TransportError::Timeout,
            },
        };

        Ok(self.complete_submission(pending, result))
    }

    fn validate_name(&self, raw: &str) -> Result<String, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        let len = name.chars().count();
        if len > self.config.max_player_name_len {
            return Err(ValidationError::PlayerNameTooLong {
                max: self.config.max_player_name_len,
                actual: len,
            });
        }
        Ok(name.to_string())
    }
}
