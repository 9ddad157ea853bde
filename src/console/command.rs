//! Console command parsing

use crate::core::{Move, MoveError};

/// Keyword that ends the game, matched case-insensitively
pub const QUIT_KEYWORD: &str = "QUIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Move),
}

/// Parse one line of player input
pub fn parse_command(input: &str) -> Result<Command, MoveError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case(QUIT_KEYWORD) {
        return Ok(Command::Quit);
    }

    input.parse().map(Command::Move)
}
