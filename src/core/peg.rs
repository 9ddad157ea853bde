use anyhow::{anyhow, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::ops::{Index, IndexMut};

/// One of the three fixed pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    pub fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid peg index: {}", idx))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive peg label: `A` is index 0, `B` index 1, `C` index 2
    pub fn from_letter(c: char) -> Option<Self> {
        let offset = (c.to_ascii_uppercase() as u32).checked_sub('A' as u32)?;
        Peg::from_index(offset as usize).ok()
    }

    pub fn letter(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }
}

/// Array indexed by peg
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PegArray<T> {
    pub values: [T; 3],
}

impl<T> PegArray<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self {
            values: [a, b, c],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Pairs each value with its peg, in A, B, C order
    pub fn entries(&self) -> impl Iterator<Item = (Peg, &T)> {
        Peg::ALL.into_iter().zip(self.values.iter())
    }

    /// Mutable access to two distinct pegs at once
    pub fn pair_mut(&mut self, first: Peg, second: Peg) -> Option<(&mut T, &mut T)> {
        let (i, j) = (first.index(), second.index());
        if i == j {
            return None;
        }

        let (lo, hi) = self.values.split_at_mut(i.max(j));
        if i < j {
            Some((&mut lo[i], &mut hi[0]))
        } else {
            Some((&mut hi[0], &mut lo[j]))
        }
    }
}

impl<T> Index<Peg> for PegArray<T> {
    type Output = T;

    fn index(&self, peg: Peg) -> &Self::Output {
        &self.values[peg.index()]
    }
}

impl<T> IndexMut<Peg> for PegArray<T> {
    fn index_mut(&mut self, peg: Peg) -> &mut Self::Output {
        &mut self.values[peg.index()]
    }
}
