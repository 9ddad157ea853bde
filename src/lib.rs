//! Hanoi - command-line Tower of Hanoi game

pub mod console;
pub mod core;
pub mod utils;

// Re-export commonly used items
pub use crate::core::{Board, GameConfig, Move, Peg, WinRule};
