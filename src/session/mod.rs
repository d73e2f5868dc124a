//! Session Engine: per-round rendering, guess judging and scoring
//!
//! # Components
//! - `state.rs`: Session state machine and guess results
//! - `tally.rs`: Correct/attempted counts and streaks
//! - `misses.rs`: Letter confusions gathered from wrong guesses

pub mod misses;
pub mod state;
pub mod tally;

pub use misses::{MissLog, MISSING};
pub use state::{GuessResult, RoundOutcome, Session, SessionError, SessionPhase};
pub use tally::Tally;
