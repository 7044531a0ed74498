//! Bulls and Cows feedback scoring
//!
//! Feedback compares a guess to a secret:
//! - Bulls: digits matching in value and position
//! - Cows: digits present in the secret but in the wrong position
//!
//! Cows use the multiset formula `Σ min(count in secret, count in guess)`
//! minus bulls. With distinct-digit codes every count is 0 or 1, but the
//! general formula stays correct if repeated digits are ever allowed.

use super::Code;
use std::fmt;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    bulls: u8,
    cows: u8,
}

impl Feedback {
    /// Build feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// Score `guess` against `secret`
    ///
    /// Pure and deterministic. Both codes must have the same length; the
    /// game never compares codes of different lengths, so a mismatch is a
    /// caller bug and fails fast in debug builds.
    ///
    /// # Examples
    /// ```
    /// use bullscows_entropy::core::{Code, Feedback};
    ///
    /// let secret = Code::new("1234", 4).unwrap();
    /// let guess = Code::new("1243", 4).unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// assert_eq!(feedback.bulls(), 2); // 1 and 2 in place
    /// assert_eq!(feedback.cows(), 2); // 3 and 4 swapped
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(
            secret.len(),
            guess.len(),
            "feedback requires equal-length codes"
        );

        let bulls = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count() as u8;

        let secret_counts = secret.digit_counts();
        let matched: u8 = guess
            .digit_counts()
            .iter()
            .map(|(digit, &count)| count.min(*secret_counts.get(digit).unwrap_or(&0)))
            .sum();

        Self {
            bulls,
            cows: matched - bulls,
        }
    }

    /// Number of digits correct in both value and position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Number of digits correct in value but not position
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// True if every position matched for a code of `len` digits
    #[inline]
    #[must_use]
    pub fn is_win(self, len: usize) -> bool {
        usize::from(self.bulls) == len
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bulls, {} cows", self.bulls, self.cows)
    }
}
