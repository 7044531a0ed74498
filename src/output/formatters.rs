//! Formatting utilities for terminal output

use crate::core::{ALPHABET, Feedback};
use crate::engine::HistoryRecord;

/// Format feedback as a peg string, bulls first
///
/// Bulls render as filled pegs, cows as hollow ones.
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let mut result = String::new();
    for _ in 0..feedback.bulls() {
        result.push('●');
    }
    for _ in 0..feedback.cows() {
        result.push('○');
    }
    if result.is_empty() {
        result.push('·');
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the full universe for `len`-digit codes
///
/// A full bar means the entropy of the untouched universe, 10·9·…·(10-len+1)
/// codes (≈ 12.3 bits for the standard 4-digit game).
#[must_use]
pub fn entropy_bar(entropy: f64, len: usize, width: usize) -> String {
    let universe_size: f64 = (0..len).map(|i| (ALPHABET.len() - i) as f64).product();
    create_progress_bar(entropy, universe_size.log2(), width)
}

/// Format one history record as a single log line
#[must_use]
pub fn history_line(record: &HistoryRecord) -> String {
    format!(
        "Guess: {}, Bulls: {}, Cows: {}, Entropy: {:.4}, Mutual Info: {:.4}",
        record.guess,
        record.feedback.bulls(),
        record.feedback.cows(),
        record.entropy_after,
        record.mutual_information
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    #[test]
    fn feedback_pegs_bulls_then_cows() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1)), "●●○");
        assert_eq!(feedback_pegs(Feedback::new(4, 0)), "●●●●");
        assert_eq!(feedback_pegs(Feedback::new(0, 3)), "○○○");
    }

    #[test]
    fn feedback_pegs_empty_is_dot() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0)), "·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_universe_for_length() {
        // Full universe entropy fills the bar regardless of code length
        assert_eq!(entropy_bar(5040_f64.log2(), 4, 10), "██████████");
        assert_eq!(entropy_bar(90_f64.log2(), 2, 10), "██████████");
        assert_eq!(entropy_bar(0.0, 4, 10), "░░░░░░░░░░");

        // Half the universe's bits fill half the bar
        let half = entropy_bar(5040_f64.log2() / 2.0, 4, 10);
        assert_eq!(half, "█████░░░░░");
    }

    #[test]
    fn history_line_mirrors_record() {
        let record = HistoryRecord {
            guess: Code::new("1243", 4).unwrap(),
            feedback: Feedback::new(2, 2),
            entropy_after: 3.4594,
            mutual_information: 8.8398,
            candidates_before: 5040,
            candidates_after: 11,
        };

        let line = history_line(&record);
        assert_eq!(
            line,
            "Guess: 1243, Bulls: 2, Cows: 2, Entropy: 3.4594, Mutual Info: 8.8398"
        );
    }
}
