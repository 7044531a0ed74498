//! Game session state machine
//!
//! A Session owns the secret, the candidate set, and the guess history for
//! one game. It is deliberately independent of any rendering layer: the host
//! feeds it raw guess text and reads back outcomes and flags.

use super::candidates::{CandidateSet, mutual_information};
use super::error::GameError;
use crate::core::{Code, Feedback};
use rand::Rng;

/// One completed guess round, as recorded for display
///
/// Display-only: the engine never reads history back to make decisions.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub guess: Code,
    pub feedback: Feedback,
    pub entropy_after: f64,
    pub mutual_information: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// The result of one accepted guess
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub guess: Code,
    pub feedback: Feedback,
    pub entropy: f64,
    pub mutual_information: f64,
    pub candidates_remaining: usize,
}

/// One game: a secret, the codes still consistent with play so far, and the
/// round history
///
/// The secret and candidate set are created together and replaced together;
/// `restart` swaps in fresh instances wholesale rather than mutating in
/// place.
#[derive(Debug)]
pub struct Session {
    len: usize,
    secret: Code,
    candidates: CandidateSet,
    history: Vec<HistoryRecord>,
    won: bool,
    exhausted: bool,
}

impl Session {
    /// Start a new session with a random secret of `len` distinct digits
    ///
    /// The randomness source is injected so hosts and tests can seed it.
    pub fn start<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self {
            len,
            secret: Code::random(len, rng),
            candidates: CandidateSet::universe(len),
            history: Vec::new(),
            won: false,
            exhausted: false,
        }
    }

    /// Replace this session with a fresh one of the same code length
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::start(self.len, rng);
    }

    /// Submit one guess and advance the session
    ///
    /// Validates the raw text, scores it against the secret, filters the
    /// candidate set, and appends a history record. A validation failure
    /// rejects the guess outright: no feedback is computed, no history is
    /// appended, and the candidate set is untouched.
    ///
    /// A winning guess sets `is_won` and takes precedence over the
    /// exhaustion check (the secret itself always survives an honest win
    /// filter, so the set cannot be empty). An empty set after filtering
    /// sets `is_exhausted` and returns `GameError::Exhausted`; the round's
    /// effects stand, and the session accepts no meaningful play until
    /// restarted.
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` for malformed input, with no state change
    /// - `GameError::Exhausted` when no consistent candidate remains
    pub fn submit_guess(&mut self, raw: &str) -> Result<RoundOutcome, GameError> {
        let guess = Code::new(raw, self.len)?;

        let feedback = Feedback::score(&self.secret, &guess);
        let entropy_before = self.candidates.entropy();
        let candidates_before = self.candidates.len();

        let filtered = self.candidates.filter(&guess, feedback);
        let entropy_after = filtered.entropy();
        let gained = mutual_information(entropy_before, entropy_after);
        self.candidates = filtered;

        self.history.push(HistoryRecord {
            guess: guess.clone(),
            feedback,
            entropy_after,
            mutual_information: gained,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        if feedback.is_win(self.len) {
            self.won = true;
        } else if self.candidates.is_empty() {
            self.exhausted = true;
            return Err(GameError::Exhausted);
        }

        Ok(RoundOutcome {
            guess,
            feedback,
            entropy: entropy_after,
            mutual_information: gained,
            candidates_remaining: self.candidates.len(),
        })
    }

    /// True once the secret has been guessed exactly
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// True once filtering has eliminated every candidate
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The secret, for the host to reveal on win or on request
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        &self.secret
    }

    /// The codes still consistent with all feedback so far
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Read-only view of the round history, oldest first
    #[must_use]
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Number of guesses accepted so far
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}
