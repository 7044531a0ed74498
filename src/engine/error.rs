//! Engine error types

use crate::core::CodeError;
use std::fmt;

/// Errors surfaced to the host by the game engine
///
/// Exactly two kinds exist. An invalid guess is recovered locally and leaves
/// every piece of session state untouched. An exhausted candidate set is only
/// reachable through inconsistent feedback and is fatal to the session: the
/// host must restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The raw guess failed validation; nothing was computed or recorded
    InvalidGuess(CodeError),
    /// Filtering left no consistent candidate; the session must restart
    Exhausted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::Exhausted => {
                write!(f, "No possible codes remain; the session must restart")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::Exhausted => None,
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        Self::InvalidGuess(err)
    }
}
