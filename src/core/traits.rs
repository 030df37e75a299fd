//! The leaderboard client seam.

use std::future::Future;

use super::types::{SubmissionRequest, SubmissionResult};

/// An asynchronous leaderboard submission endpoint.
///
/// The submission workflow talks to the outside world exclusively through
/// this trait; transport details (HTTP, websocket, in-process) are the
/// implementer's concern.
///
/// # Contract
///
/// - Ordinary rejections (validation failure, duplicate name, etc.) MUST be
///   reported as [`SubmissionResult::Rejected`], never as a panic.
/// - Only unreachable/transport conditions map to
///   [`SubmissionResult::Failed`].
/// - Each request is consumed exactly once; the workflow guarantees no
///   duplicate in-flight submission per screen.
pub trait LeaderboardClient {
    /// Submit a score for ranking.
    fn submit(
        &self,
        request: SubmissionRequest,
    ) -> impl Future<Output = SubmissionResult> + Send;
}
