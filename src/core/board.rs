use anyhow::{bail, ensure, Result};
use rand::{seq::IndexedRandom, Rng};
use tracing::{debug, trace};

use super::{
    error::MoveError,
    game::GameConfig,
    moves::Move,
    peg::{Peg, PegArray},
};

/// A disk, identified by its size
pub type Disk = u8;

/// Three pegs of disks. Each peg is stored bottom-to-top, so the last
/// element is the top disk and sizes strictly decrease along the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pegs: PegArray<Vec<Disk>>,
    num_disks: u8,
    starting_peg: Peg,
    moves_made: u32,
}

impl Board {
    /// Stack the whole tower on a randomly chosen peg
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let peg = *Peg::ALL.choose(rng).unwrap_or(&Peg::A);
        Self::with_starting_peg(config.num_disks, peg)
    }

    pub fn with_starting_peg(num_disks: u8, starting_peg: Peg) -> Self {
        let mut pegs = PegArray::<Vec<Disk>>::default();
        pegs[starting_peg] = (1..=num_disks).rev().collect();

        debug!(num_disks, starting_peg = ?starting_peg, "board created");

        Self {
            pegs,
            num_disks,
            starting_peg,
            moves_made: 0,
        }
    }

    /// Build an arbitrary position. Sizes `1..=N` must each appear once and
    /// every peg must be strictly decreasing bottom-to-top.
    pub fn from_pegs(pegs: PegArray<Vec<Disk>>, starting_peg: Peg) -> Result<Self> {
        let total: usize = pegs.iter().map(Vec::len).sum();
        ensure!(total > 0 && total <= Disk::MAX as usize,
            "invalid number of disks: {}", total);

        let mut seen = vec![false; total + 1];
        for (peg, disks) in pegs.entries() {
            ensure!(disks.windows(2).all(|w| w[0] > w[1]),
                "peg {} is not strictly decreasing: {:?}", peg, disks);

            for &disk in disks {
                let size = disk as usize;
                if size == 0 || size > total || seen[size] {
                    bail!("disk {} is out of range or repeated", disk);
                }
                seen[size] = true;
            }
        }

        Ok(Self {
            pegs,
            num_disks: total as u8,
            starting_peg,
            moves_made: 0,
        })
    }

    pub fn pegs(&self) -> &PegArray<Vec<Disk>> {
        &self.pegs
    }

    /// Disks on a peg, bottom first
    pub fn disks(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg]
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg].last().copied()
    }

    pub fn num_disks(&self) -> u8 {
        self.num_disks
    }

    pub fn starting_peg(&self) -> Peg {
        self.starting_peg
    }

    /// Number of moves accepted so far
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Validate a move against the current position without applying it
    pub fn check(&self, mv: Move) -> Result<Disk, MoveError> {
        let disk = self.top(mv.from).ok_or(MoveError::EmptySource(mv.from))?;

        match self.top(mv.to) {
            Some(target) if target < disk => Err(MoveError::SmallerDisk {
                from: mv.from,
                to: mv.to,
            }),
            _ => Ok(disk),
        }
    }

    /// Move the top disk of `mv.from` onto `mv.to`. A rejected move leaves
    /// the board untouched.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Err(err) = self.check(mv) {
            trace!(%mv, %err, "move rejected");
            return Err(err);
        }

        let Some((from, to)) = self.pegs.pair_mut(mv.from, mv.to) else {
            return Err(MoveError::InvalidToken(mv.to_string()));
        };
        if let Some(disk) = from.pop() {
            to.push(disk);
            self.moves_made += 1;
            debug!(%mv, disk, moves_made = self.moves_made, "move applied");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn moves(tokens: &[&str]) -> Vec<Move> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_new_places_tower_on_one_peg() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(&config, &mut rng);

        let start = board.starting_peg();
        assert_eq!(board.disks(start), &[5, 4, 3, 2, 1]);
        for peg in Peg::ALL.into_iter().filter(|&p| p != start) {
            assert!(board.disks(peg).is_empty());
        }
    }

    #[test]
    fn test_new_is_deterministic_for_a_seed() {
        let config = GameConfig::default();
        let a = Board::new(&config, &mut StdRng::seed_from_u64(99));
        let b = Board::new(&config, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_peg_can_start() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = PegArray::new(false, false, false);

        for _ in 0..200 {
            seen[Board::new(&config, &mut rng).starting_peg()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_three_disk_solution() {
        let mut board = Board::with_starting_peg(3, Peg::A);

        board.apply("AC".parse().unwrap()).unwrap();
        assert_eq!(board.disks(Peg::A), &[3, 2]);
        assert_eq!(board.disks(Peg::C), &[1]);

        for mv in moves(&["AB", "CB", "AC", "BA", "BC", "AC"]) {
            board.apply(mv).unwrap();
        }

        assert_eq!(board.disks(Peg::C), &[3, 2, 1]);
        assert!(board.disks(Peg::A).is_empty());
        assert!(board.disks(Peg::B).is_empty());
        assert_eq!(board.moves_made(), 7);
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut board = Board::with_starting_peg(3, Peg::A);
        let before = board.clone();

        let err = board.apply("BC".parse().unwrap()).unwrap_err();
        assert_eq!(err, MoveError::EmptySource(Peg::B));
        assert_eq!(board, before);
    }

    #[test]
    fn test_smaller_destination_rejected() {
        let mut board = Board::with_starting_peg(3, Peg::A);
        board.apply("AB".parse().unwrap()).unwrap();
        let before = board.clone();

        let err = board.apply("AB".parse().unwrap()).unwrap_err();
        assert_eq!(err, MoveError::SmallerDisk { from: Peg::A, to: Peg::B });
        assert_eq!(board, before);
        assert_eq!(board.moves_made(), 1);
    }

    #[test]
    fn test_check_does_not_mutate() {
        let board = Board::with_starting_peg(4, Peg::C);
        assert_eq!(board.check("CA".parse().unwrap()), Ok(1));
        assert_eq!(board.disks(Peg::C), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_from_pegs_validation() {
        assert!(Board::from_pegs(PegArray::new(vec![2, 1], vec![3], vec![]), Peg::A).is_ok());
        assert!(Board::from_pegs(PegArray::new(vec![1, 2], vec![3], vec![]), Peg::A).is_err());
        assert!(Board::from_pegs(PegArray::new(vec![2, 1], vec![2], vec![]), Peg::A).is_err());
        assert!(Board::from_pegs(PegArray::new(vec![4, 1], vec![2], vec![]), Peg::A).is_err());
        assert!(Board::from_pegs(PegArray::default(), Peg::A).is_err());
    }
}
