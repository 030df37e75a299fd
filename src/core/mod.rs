//! Endgame - Core types and contracts
//!
//! Shared data types, the leaderboard client seam, display-contract
//! constants, and the error taxonomy. This module has no I/O dependencies.

mod constants;
mod error;
mod traits;
mod types;

pub use constants::*;
pub use error::*;
pub use traits::*;
pub use types::*;
