//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types with zero game state.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;

pub use code::{ALPHABET, CODE_LENGTH, Code, CodeError};
pub use feedback::Feedback;
