//! Bulls and Cows
//!
//! A single-player code-breaking game whose engine tracks the remaining
//! candidate secrets and reports the Shannon entropy and mutual information
//! of every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use bullscows_entropy::core::{Code, Feedback};
//!
//! // Score a guess against a secret
//! let secret = Code::new("1234", 4).unwrap();
//! let guess = Code::new("1243", 4).unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!((feedback.bulls(), feedback.cows()), (2, 2));
//! ```

// Core domain types
pub mod core;

// Candidate tracking and the session state machine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
