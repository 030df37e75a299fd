//! Endgame - Submission layer
//!
//! The workflow that carries a leaderboard submission from name entry
//! through the asynchronous client call and back into the score store.

mod workflow;

pub use workflow::*;
