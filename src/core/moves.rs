use std::str::FromStr;

use super::error::MoveError;
use super::peg::Peg;

/// Transfer of the top disk of one peg onto another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    /// Every legal token, in the order they are listed to the player
    pub const ALL: [Move; 6] = [
        Move { from: Peg::A, to: Peg::B },
        Move { from: Peg::B, to: Peg::A },
        Move { from: Peg::A, to: Peg::C },
        Move { from: Peg::C, to: Peg::A },
        Move { from: Peg::B, to: Peg::C },
        Move { from: Peg::C, to: Peg::B },
    ];

    /// Returns `None` when both ends name the same peg
    pub fn new(from: Peg, to: Peg) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }

    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || MoveError::InvalidToken(token.to_string());

        let mut letters = token.chars();
        let (Some(from), Some(to), None) = (letters.next(), letters.next(), letters.next()) else {
            return Err(invalid());
        };

        let from = Peg::from_letter(from).ok_or_else(invalid)?;
        let to = Peg::from_letter(to).ok_or_else(invalid)?;

        Move::new(from, to).ok_or_else(invalid)
    }
}
