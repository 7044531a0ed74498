//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_exhausted, print_history, print_reveal, print_round_outcome, print_win};
