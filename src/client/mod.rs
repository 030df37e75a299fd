//! Endgame - Reference leaderboard clients
//!
//! In-process implementations of the [`LeaderboardClient`] seam for demos
//! and integration-style tests.
//!
//! [`LeaderboardClient`]: crate::core::LeaderboardClient

mod memory;

pub use memory::*;
