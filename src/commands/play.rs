//! Interactive game loop
//!
//! The terminal host for the engine: reads guesses, renders feedback and
//! information metrics, and restarts the session on a win, an exhausted
//! candidate set, or a reveal.

use crate::core::CODE_LENGTH;
use crate::engine::{GameError, Session};
use crate::output::{
    print_exhausted, print_history, print_reveal, print_round_outcome, print_win,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Non-guess actions the player can type at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopCommand {
    Quit,
    New,
    History,
    Reveal,
}

/// Parse prompt input as a command, or None if it should be treated as a
/// guess
fn parse_command(input: &str) -> Option<LoopCommand> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(LoopCommand::Quit),
        "new" | "n" => Some(LoopCommand::New),
        "history" | "h" => Some(LoopCommand::History),
        "reveal" | "r" => Some(LoopCommand::Reveal),
        _ => None,
    }
}

/// Run the interactive game
///
/// `seed` fixes the secret sequence for reproducible games; `None` draws
/// from OS entropy.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(seed: Option<u64>) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bulls and Cows - Entropy Edition                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret {CODE_LENGTH}-digit code with no repeated digits.");
    println!("Each guess earns bulls (right digit, right place) and cows");
    println!("(right digit, wrong place), plus how many bits you just learned.\n");
    println!(
        "Commands: 'quit' to exit, 'new' for a new secret, 'history' to review,\n\
         'reveal' to give up and see the secret\n"
    );

    let mut session = Session::start(CODE_LENGTH, &mut rng);

    loop {
        let input = get_user_input("Enter your guess")?;

        match parse_command(&input) {
            Some(LoopCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(LoopCommand::New) => {
                session.restart(&mut rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            Some(LoopCommand::History) => {
                print_history(session.history());
                println!();
                continue;
            }
            Some(LoopCommand::Reveal) => {
                print_reveal(session.reveal_secret());
                session.restart(&mut rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            None => {}
        }

        match session.submit_guess(&input) {
            Ok(outcome) => {
                print_round_outcome(&outcome);

                if session.is_won() {
                    print_win(session.reveal_secret(), session.rounds_played());
                    print_history(session.history());

                    match get_user_input("\nPlay again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.restart(&mut rng);
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                } else {
                    println!();
                }
            }
            Err(GameError::InvalidGuess(err)) => {
                println!("❌ {err}\n");
            }
            Err(GameError::Exhausted) => {
                print_exhausted();
                session.restart(&mut rng);
                println!("\n🔄 New game started!\n");
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_recognizes_reveal() {
        assert_eq!(parse_command("reveal"), Some(LoopCommand::Reveal));
        assert_eq!(parse_command("r"), Some(LoopCommand::Reveal));
        assert_eq!(parse_command("REVEAL"), Some(LoopCommand::Reveal));
    }

    #[test]
    fn parse_command_recognizes_loop_controls() {
        assert_eq!(parse_command("quit"), Some(LoopCommand::Quit));
        assert_eq!(parse_command("q"), Some(LoopCommand::Quit));
        assert_eq!(parse_command("new"), Some(LoopCommand::New));
        assert_eq!(parse_command("history"), Some(LoopCommand::History));
    }

    #[test]
    fn parse_command_passes_guesses_through() {
        assert_eq!(parse_command("1234"), None);
        assert_eq!(parse_command("0987"), None);
        // Invalid guesses are still guesses; validation rejects them later
        assert_eq!(parse_command("1123"), None);
    }
}
