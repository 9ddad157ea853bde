//! Core game representations and rules

pub mod board;
pub mod display;
pub mod error;
pub mod game;
pub mod moves;
pub mod peg;
pub mod win;

pub use board::{Board, Disk};
pub use error::MoveError;
pub use game::{GameConfig, DEFAULT_DISKS, DISK_RANGE};
pub use moves::Move;
pub use peg::{Peg, PegArray};
pub use win::WinRule;
