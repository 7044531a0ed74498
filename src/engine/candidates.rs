//! Candidate-space tracking
//!
//! The candidate set holds every code still consistent with all feedback
//! observed in the current session. Uncertainty is measured as Shannon
//! entropy under the uniform model: every remaining candidate is treated as
//! equally likely, so `H = log2(|candidates|)`.

use crate::core::{ALPHABET, Code, Feedback};
use rayon::prelude::*;

/// The set of codes still consistent with all observed feedback
///
/// Shrinks (or stays equal) on every filter pass; only `universe` and
/// `filter` can produce one, so membership is unique by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// Generate the full universe of codes of `len` distinct digits
    ///
    /// Every ordered arrangement of `len` distinct digits from the 10-digit
    /// alphabet. For `len == 4` that is 10·9·8·7 = 5040 codes.
    ///
    /// # Examples
    /// ```
    /// use bullscows_entropy::engine::CandidateSet;
    ///
    /// let universe = CandidateSet::universe(4);
    /// assert_eq!(universe.len(), 5040);
    /// ```
    #[must_use]
    pub fn universe(len: usize) -> Self {
        debug_assert!(len <= ALPHABET.len(), "code longer than alphabet");

        let mut codes = Vec::new();
        let mut prefix = Vec::with_capacity(len);
        let mut used = [false; 10];
        extend_arrangements(&mut prefix, &mut used, len, &mut codes);

        Self { codes }
    }

    /// Number of candidates remaining
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no candidate remains
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True if `code` is still a candidate
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Iterate over the remaining candidates
    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    /// Shannon entropy of the set in bits
    ///
    /// `log2(|set|)` for a non-empty set, `0.0` otherwise. Uniform likelihood
    /// over the remaining candidates is the modeling assumption; filtering is
    /// the only place history enters.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        if self.codes.is_empty() {
            return 0.0;
        }
        (self.codes.len() as f64).log2()
    }

    /// Keep exactly the candidates consistent with one observed feedback
    ///
    /// A candidate survives iff scoring it against `guess` reproduces
    /// `observed`. Pure filter: no reordering, no new members.
    #[must_use]
    pub fn filter(&self, guess: &Code, observed: Feedback) -> Self {
        let codes = self
            .codes
            .par_iter()
            .filter(|candidate| Feedback::score(candidate, guess) == observed)
            .cloned()
            .collect();

        Self { codes }
    }
}

/// Information gained by one guess, in bits
///
/// The drop in entropy from before the filter pass to after. Non-negative
/// for any honestly-computed feedback, since filtering never grows the set.
#[must_use]
pub fn mutual_information(entropy_before: f64, entropy_after: f64) -> f64 {
    entropy_before - entropy_after
}

/// Depth-first arrangement generation over the unused digits
fn extend_arrangements(
    prefix: &mut Vec<u8>,
    used: &mut [bool; 10],
    len: usize,
    out: &mut Vec<Code>,
) {
    if prefix.len() == len {
        out.push(Code::from_digits(prefix));
        return;
    }

    for (i, &digit) in ALPHABET.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(digit);
        extend_arrangements(prefix, used, len, out);
        prefix.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn code(text: &str) -> Code {
        Code::new(text, text.len()).unwrap()
    }

    #[test]
    fn universe_size_is_falling_factorial() {
        assert_eq!(CandidateSet::universe(1).len(), 10);
        assert_eq!(CandidateSet::universe(2).len(), 90);
        assert_eq!(CandidateSet::universe(3).len(), 720);
        assert_eq!(CandidateSet::universe(4).len(), 5040);
    }

    #[test]
    fn universe_members_are_unique_and_valid() {
        let universe = CandidateSet::universe(4);
        let distinct: FxHashSet<&Code> = universe.iter().collect();

        assert_eq!(distinct.len(), 5040);
        for candidate in universe.iter() {
            // Each member must survive the validating constructor
            assert!(Code::new(candidate.text(), 4).is_ok());
        }
    }

    #[test]
    fn entropy_of_universe() {
        let universe = CandidateSet::universe(4);
        assert!((universe.entropy() - 5040_f64.log2()).abs() < 1e-9);
        assert!((universe.entropy() - 12.2992).abs() < 0.001);
    }

    #[test]
    fn entropy_of_empty_set_is_zero() {
        let universe = CandidateSet::universe(4);
        // A deliberately impossible feedback empties the set
        let emptied = universe.filter(&code("1234"), Feedback::new(3, 1));
        assert!(emptied.is_empty());
        assert!((emptied.entropy() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filter_keeps_exactly_the_consistent_codes() {
        let universe = CandidateSet::universe(4);
        let secret = code("1234");
        let guess = code("5678");
        let observed = Feedback::score(&secret, &guess);

        let filtered = universe.filter(&guess, observed);

        // The true secret always survives an honest filter
        assert!(filtered.contains(&secret));
        // Every survivor reproduces the observed feedback
        for candidate in filtered.iter() {
            assert_eq!(Feedback::score(candidate, &guess), observed);
        }
        // (0, 0) against 5678 leaves the arrangements of the other 6 digits
        assert_eq!(filtered.len(), 6 * 5 * 4 * 3);
    }

    #[test]
    fn filter_is_idempotent() {
        let universe = CandidateSet::universe(4);
        let guess = code("1234");
        let observed = Feedback::new(1, 2);

        let once = universe.filter(&guess, observed);
        let twice = once.filter(&guess, observed);
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_never_grows_the_set() {
        let mut current = CandidateSet::universe(4);
        let secret = code("9043");

        for guess in ["1234", "5678", "9012", "9043"] {
            let guess = code(guess);
            let observed = Feedback::score(&secret, &guess);
            let next = current.filter(&guess, observed);
            assert!(next.len() <= current.len());
            assert!(next.contains(&secret));
            current = next;
        }

        // Guessing the secret itself pins the set to exactly it
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn mutual_information_is_entropy_drop() {
        let universe = CandidateSet::universe(4);
        let before = universe.entropy();

        let guess = code("5678");
        let observed = Feedback::new(0, 0);
        let after = universe.filter(&guess, observed).entropy();

        let gain = mutual_information(before, after);
        assert!(gain > 0.0);
        assert!(after < before);
        // 360 codes survive: log2(5040/360) bits gained
        assert!((gain - (5040_f64 / 360.0).log2()).abs() < 1e-9);
    }

    #[test]
    fn mutual_information_non_negative_over_honest_play() {
        let secret = code("3817");
        let mut current = CandidateSet::universe(4);

        for guess in ["0123", "4567", "8901", "3817"] {
            let guess = code(guess);
            let observed = Feedback::score(&secret, &guess);
            let before = current.entropy();
            current = current.filter(&guess, observed);
            assert!(mutual_information(before, current.entropy()) >= 0.0);
        }
    }
}
