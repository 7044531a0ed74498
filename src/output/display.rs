//! Display functions for game output

use super::formatters::{entropy_bar, feedback_pegs, history_line};
use crate::core::Code;
use crate::engine::{HistoryRecord, RoundOutcome};
use colored::Colorize;

/// Print the outcome of one accepted guess
pub fn print_round_outcome(outcome: &RoundOutcome) {
    println!(
        "\n{} {} {}",
        outcome.guess.to_string().bright_white().bold(),
        feedback_pegs(outcome.feedback).bright_yellow(),
        format!("({})", outcome.feedback).cyan()
    );

    let bar = entropy_bar(outcome.entropy, outcome.guess.len(), 30);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.4} bits", outcome.entropy).bright_yellow()
    );
    println!(
        "   Info gained: {} bits",
        format!("{:.4}", outcome.mutual_information).bright_yellow()
    );
    println!(
        "   Candidates:  {} remaining",
        outcome.candidates_remaining.to_string().bright_cyan()
    );
}

/// Print the full round history, oldest first
pub fn print_history(history: &[HistoryRecord]) {
    if history.is_empty() {
        return;
    }

    println!("\n{}", "History:".bright_cyan().bold());
    for (i, record) in history.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            history_line(record)
        );
    }
}

/// Print the win banner, revealing the secret
pub fn print_win(secret: &Code, rounds: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  C O D E   C R A C K E D !  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  The secret was {}",
        secret.to_string().bright_yellow().bold()
    );
    println!(
        "  Found in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "guess" } else { "guesses" }
    );
}

/// Print the revealed secret when the player gives up
pub fn print_reveal(secret: &Code) {
    println!(
        "\n🔍 The secret number is {}",
        secret.to_string().bright_yellow().bold()
    );
}

/// Print the exhausted-candidate-set error banner
pub fn print_exhausted() {
    println!(
        "\n{}",
        "❌ No possible codes remain. The feedback was inconsistent; restarting."
            .red()
            .bold()
    );
}
