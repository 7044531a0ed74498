//! The inference engine
//!
//! Candidate-space tracking, entropy accounting, and the session state
//! machine that ties them to a secret.

mod candidates;
mod error;
mod session;

pub use candidates::{CandidateSet, mutual_information};
pub use error::GameError;
pub use session::{HistoryRecord, RoundOutcome, Session};
