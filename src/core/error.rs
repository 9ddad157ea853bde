use thiserror::Error;

use super::peg::Peg;

/// Reasons a move request is refused. None of these change the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Your input must be one of: AB, BA, AC, CA, BC, CB, or QUIT")]
    InvalidToken(String),

    #[error("You cannot move a disk from an empty tower!")]
    EmptySource(Peg),

    #[error("You cannot place a disk on top of a smaller disk!")]
    SmallerDisk { from: Peg, to: Peg },
}
