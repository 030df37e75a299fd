//! Endgame - Score layer
//!
//! Implements:
//! - Session-scoped score/high-score state with monotonic reconciliation
//! - The submission eligibility rule

mod eligibility;
mod store;

pub use eligibility::*;
pub use store::*;
