use super::board::Board;

/// When a board counts as solved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinRule {
    /// Some peg other than the starting peg holds every disk
    #[default]
    MovedOffStart,
    /// Two pegs are empty, whichever peg holds the tower
    SinglePeg,
}

impl WinRule {
    pub fn is_solved(self, board: &Board) -> bool {
        let total = board.num_disks() as usize;

        match self {
            WinRule::MovedOffStart => board
                .pegs()
                .entries()
                .any(|(peg, disks)| peg != board.starting_peg() && disks.len() == total),
            WinRule::SinglePeg => board
                .pegs()
                .iter()
                .filter(|disks| disks.is_empty())
                .count() == 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::peg::{Peg, PegArray};

    #[test]
    fn test_initial_board_not_solved_when_moved_off_start() {
        for peg in Peg::ALL {
            let board = Board::with_starting_peg(4, peg);
            assert!(!WinRule::MovedOffStart.is_solved(&board));
        }
    }

    #[test]
    fn test_single_peg_accepts_initial_board() {
        let board = Board::with_starting_peg(4, Peg::B);
        assert!(WinRule::SinglePeg.is_solved(&board));
    }

    #[test]
    fn test_rules_agree_on_transferred_tower() {
        let board = Board::from_pegs(
            PegArray::new(vec![], vec![], vec![3, 2, 1]),
            Peg::A,
        ).unwrap();

        assert!(WinRule::MovedOffStart.is_solved(&board));
        assert!(WinRule::SinglePeg.is_solved(&board));
    }

    #[test]
    fn test_split_tower_is_not_solved() {
        let board = Board::from_pegs(
            PegArray::new(vec![3], vec![2, 1], vec![]),
            Peg::A,
        ).unwrap();

        assert!(!WinRule::MovedOffStart.is_solved(&board));
        assert!(!WinRule::SinglePeg.is_solved(&board));
    }
}
