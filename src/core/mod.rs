//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board rules, the refill RNG, and the session
//! bookkeeping. It has zero dependencies on UI or I/O.

pub mod board;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use board::{Board, MatchRun};
pub use rng::SimpleRng;
pub use state::{GameState, MissOutcome, Phase};
