use std::fmt;

use super::{
    board::{Board, Disk},
    moves::Move,
    peg::Peg,
};

/// Width of one peg column, wide enough for the largest disk
fn column_width(num_disks: u8) -> usize {
    num_disks as usize * 2 + 2
}

fn disk_glyph(disk: Disk, num_disks: u8) -> String {
    let pad = " ".repeat((num_disks - disk) as usize);
    let edge = "@".repeat(disk as usize);
    format!("{pad}{edge}{disk:_>2}{edge}{pad}")
}

fn empty_glyph(num_disks: u8) -> String {
    let pad = " ".repeat(num_disks as usize);
    format!("{pad}||{pad}")
}

impl Board {
    /// Lines of the drawing, top row first and peg labels last
    pub fn render_lines(&self) -> Vec<String> {
        let n = self.num_disks();
        let width = column_width(n);
        let gap = " ".repeat(width - 1);

        let mut lines = vec![format!("{}A{gap}B{gap}C", " ".repeat(width / 2))];

        // Heights 0..=n, so the top row is always bare peg
        for height in 0..=n as usize {
            let line: String = self
                .pegs()
                .iter()
                .map(|disks| match disks.get(height) {
                    Some(&disk) => disk_glyph(disk, n),
                    None => empty_glyph(n),
                })
                .collect();
            lines.push(line);
        }

        lines.reverse();
        lines
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
