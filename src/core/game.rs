use anyhow::{ensure, Result};
use std::ops::RangeInclusive;

use super::win::WinRule;

/// Disk counts the game accepts
pub const DISK_RANGE: RangeInclusive<u8> = 3..=19;
pub const DEFAULT_DISKS: u8 = 5;

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of disks in the tower
    pub num_disks: u8,
    /// Condition under which the puzzle counts as solved
    pub win_rule: WinRule,
}

impl GameConfig {
    pub fn new(num_disks: u8) -> Result<Self> {
        ensure!(DISK_RANGE.contains(&num_disks),
            "number of disks must be between {} and {}, got {}",
            DISK_RANGE.start(), DISK_RANGE.end(), num_disks);

        Ok(Self {
            num_disks,
            win_rule: WinRule::default(),
        })
    }

    pub fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    /// Fewest moves that can transfer the whole tower, saturating at `u64::MAX`
    pub fn optimal_moves(&self) -> u64 {
        1u64.checked_shl(self.num_disks as u32)
            .map_or(u64::MAX, |moves| moves - 1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_disks: DEFAULT_DISKS,
            win_rule: WinRule::default(),
        }
    }
}
