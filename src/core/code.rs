//! Digit code representation
//!
//! A Code is an ordered sequence of distinct decimal digits, stored as ASCII
//! bytes. Both the secret and every guess are Codes of the same length.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of digits in a code for the standard game
pub const CODE_LENGTH: usize = 4;

/// The digit alphabet codes are drawn from
pub const ALPHABET: &[u8] = b"0123456789";

/// A sequence of distinct decimal digits
///
/// Immutable once created; the validating constructor is the only public way
/// to build one from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    text: String,
}

/// Error type for invalid codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    NonDigit,
    RepeatedDigit,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} digits, got {actual}")
            }
            Self::NonDigit => write!(f, "Code must contain only digits 0-9"),
            Self::RepeatedDigit => write!(f, "Code must not repeat a digit"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from text
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly `len`
    /// - Any character is not an ASCII digit
    /// - Any digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use bullscows_entropy::core::Code;
    ///
    /// let code = Code::new("1234", 4).unwrap();
    /// assert_eq!(code.text(), "1234");
    ///
    /// assert!(Code::new("123", 4).is_err());
    /// assert!(Code::new("1123", 4).is_err());
    /// ```
    pub fn new(text: impl Into<String>, len: usize) -> Result<Self, CodeError> {
        let text: String = text.into();

        // Validate length
        if text.len() != len {
            return Err(CodeError::InvalidLength {
                expected: len,
                actual: text.len(),
            });
        }

        // Validate digits
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::NonDigit);
        }

        // Validate distinctness: 10 possible digits, a bitmask suffices
        let mut seen = 0u16;
        for b in text.bytes() {
            let bit = 1u16 << (b - b'0');
            if seen & bit != 0 {
                return Err(CodeError::RepeatedDigit);
            }
            seen |= bit;
        }

        Ok(Self { text })
    }

    /// Sample a uniformly random code of `len` distinct digits
    ///
    /// Randomness is injected so callers can seed it for reproducible games.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        debug_assert!(len <= ALPHABET.len(), "code longer than alphabet");

        let mut digits = ALPHABET.to_vec();
        let (chosen, _) = digits.partial_shuffle(rng, len);

        Self {
            text: String::from_utf8(chosen.to_vec()).expect("alphabet is ASCII"),
        }
    }

    /// Build a Code from raw digit bytes already known to be valid
    ///
    /// Used by universe generation, which produces distinct digits by
    /// construction.
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        debug_assert!(digits.iter().all(u8::is_ascii_digit));
        Self {
            text: String::from_utf8(digits.to_vec()).expect("digits are ASCII"),
        }
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the code as digit bytes
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the code has no digits
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each digit in the code
    ///
    /// Used by the feedback oracle's multiset formula. Counts are always 0 or
    /// 1 for valid Codes, but the map form keeps the oracle correct if the
    /// distinct-digit constraint is ever relaxed.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for b in self.text.bytes() {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
