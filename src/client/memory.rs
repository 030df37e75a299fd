//! In-process leaderboard.

use std::sync::Mutex;

use crate::core::{LeaderboardClient, SubmissionRequest, SubmissionResult};

/// One entry on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    /// Player identifier.
    pub player_name: String,

    /// Best submitted score for this player.
    pub score: u32,
}

/// An in-memory leaderboard keeping the best entry per player.
///
/// Honors the client contract: business rejections (zero score, a name
/// that already holds an equal or better score) come back as
/// [`SubmissionResult::Rejected`]; this client never fails and never
/// panics on ordinary input.
#[derive(Debug, Default)]
pub struct MemoryLeaderboard {
    entries: Mutex<Vec<BoardEntry>>,
}

impl MemoryLeaderboard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The top `n` entries, best score first; ties break alphabetically.
    pub fn top(&self, n: usize) -> Vec<BoardEntry> {
        let mut entries = self
            .entries
            .lock()
            .expect("leaderboard lock poisoned")
            .clone();
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.player_name.cmp(&b.player_name))
        });
        entries.truncate(n);
        entries
    }

    /// Number of ranked players.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("leaderboard lock poisoned").len()
    }

    /// Check whether the board has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn apply(&self, request: SubmissionRequest) -> SubmissionResult {
        if request.score == 0 {
            return SubmissionResult::Rejected {
                reason: "zero scores are not ranked".into(),
            };
        }

        let mut entries = self.entries.lock().expect("leaderboard lock poisoned");

        if let Some(existing) = entries
            .iter_mut()
            .find(|entry| entry.player_name == request.player_name)
        {
            if request.score <= existing.score {
                return SubmissionResult::Rejected {
                    reason: format!(
                        "{} already holds an equal or better score",
                        request.player_name
                    ),
                };
            }
            existing.score = request.score;
        } else {
            entries.push(BoardEntry {
                player_name: request.player_name.clone(),
                score: request.score,
            });
        }

        // 1-based rank: one past the number of strictly better entries
        let rank = 1 + entries
            .iter()
            .filter(|entry| entry.score > request.score)
            .count() as u32;

        tracing::debug!(
            player = %request.player_name,
            score = request.score,
            rank,
            "entry ranked"
        );
        SubmissionResult::Accepted { rank }
    }
}

impl LeaderboardClient for MemoryLeaderboard {
    async fn submit(&self, request: SubmissionRequest) -> SubmissionResult {
        self.apply(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, score: u32) -> SubmissionRequest {
        SubmissionRequest {
            player_name: name.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn test_first_entry_ranks_first() {
        let board = MemoryLeaderboard::new();
        let result = board.submit(request("ada", 18)).await;
        assert_eq!(result, SubmissionResult::Accepted { rank: 1 });
    }

    #[tokio::test]
    async fn test_rank_counts_strictly_better_entries() {
        let board = MemoryLeaderboard::new();
        board.submit(request("ada", 30)).await;
        board.submit(request("grace", 20)).await;

        let result = board.submit(request("alan", 25)).await;
        assert_eq!(result, SubmissionResult::Accepted { rank: 2 });

        let top: Vec<_> = board.top(3).into_iter().map(|e| e.player_name).collect();
        assert_eq!(top, ["ada", "alan", "grace"]);
    }

    #[tokio::test]
    async fn test_zero_score_is_rejected() {
        let board = MemoryLeaderboard::new();
        let result = board.submit(request("ada", 0)).await;
        assert!(matches!(result, SubmissionResult::Rejected { .. }));
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn test_non_improving_duplicate_is_rejected() {
        let board = MemoryLeaderboard::new();
        board.submit(request("ada", 18)).await;

        let result = board.submit(request("ada", 18)).await;
        assert!(matches!(result, SubmissionResult::Rejected { .. }));
        assert_eq!(board.len(), 1);
    }

    #[tokio::test]
    async fn test_improving_duplicate_replaces_entry() {
        let board = MemoryLeaderboard::new();
        board.submit(request("ada", 18)).await;

        let result = board.submit(request("ada", 40)).await;
        assert_eq!(result, SubmissionResult::Accepted { rank: 1 });
        assert_eq!(board.len(), 1);
        assert_eq!(board.top(1)[0].score, 40);
    }
}
