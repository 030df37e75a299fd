//! Endgame - Presentation binding
//!
//! A thin rendering surface over the score store: identifier-keyed text
//! fragments that the display harness looks up by stable id. No business
//! logic lives here beyond binding state to the fragment contract.

mod game_over;
mod screen;

pub use game_over::*;
pub use screen::*;
