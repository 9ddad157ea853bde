//! The interactive game loop

use anyhow::{Context, Result};
use colored::Colorize;
use indoc::indoc;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::command::{parse_command, Command};
use crate::core::{Board, GameConfig, Move};

const INTRO: &str = indoc! {"
    Move the tower of disks, one disk at a time, to another tower.
    A disk cannot be moved on top of a smaller disk.
"};

const PROMPT: &str = indoc! {r#"

    Enter the letters of "from" and "to" towers, or QUIT.
    A disk cannot be moved on top of a smaller disk.
    > "#};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { moves: u32 },
    Quit,
}

/// Result of one prompt cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Moved(Move),
    Quit,
}

/// One game played over a line-oriented reader and writer
pub struct Session<R, W> {
    pub config: GameConfig,
    pub board: Board,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: GameConfig, board: Board, input: R, output: W) -> Self {
        Self {
            config,
            board,
            input,
            output,
            color: false,
        }
    }

    /// Style messages with ANSI colors. Off unless the caller knows the
    /// writer is a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Play until the puzzle is solved or the player quits
    pub fn run(&mut self) -> Result<Outcome> {
        writeln!(self.output, "{}", INTRO)?;

        loop {
            self.display()?;

            match self.read_move()? {
                Turn::Quit => {
                    writeln!(self.output, "Quitting...")?;
                    info!(moves = self.board.moves_made(), "player quit");
                    return Ok(Outcome::Quit);
                }
                Turn::Moved(mv) => debug!(%mv, "turn complete"),
            }

            if self.config.win_rule.is_solved(&self.board) {
                self.display()?;

                let moves = self.board.moves_made();
                let message = "You solved the puzzle!";
                if self.color {
                    writeln!(self.output, "{}", message.bright_green())?;
                } else {
                    writeln!(self.output, "{}", message)?;
                }
                writeln!(self.output, "Moves: {} (optimal: {})",
                    moves, self.config.optimal_moves())?;

                info!(moves, "puzzle solved");
                return Ok(Outcome::Solved { moves });
            }
        }
    }

    pub fn display(&mut self) -> Result<()> {
        write!(self.output, "{}", self.board)?;
        Ok(())
    }

    /// Prompt until a legal move is applied or the player quits.
    /// End of input counts as quitting.
    fn read_move(&mut self) -> Result<Turn> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            // Non-UTF-8 input decodes lossily and fails as an invalid token
            let mut buf = Vec::new();
            let read = self.input.read_until(b'\n', &mut buf)
                .context("failed to read player input")?;
            if read == 0 {
                debug!("input closed");
                return Ok(Turn::Quit);
            }
            let line = String::from_utf8_lossy(&buf);

            let result = parse_command(&line).and_then(|cmd| match cmd {
                Command::Quit => Ok(Turn::Quit),
                Command::Move(mv) => self.board.apply(mv).map(|()| Turn::Moved(mv)),
            });

            match result {
                Ok(turn) => return Ok(turn),
                Err(err) => {
                    debug!(input = line.trim(), %err, "input rejected");
                    if self.color {
                        writeln!(self.output, "{}", err.to_string().bright_red())?;
                    } else {
                        writeln!(self.output, "{}", err)?;
                    }
                }
            }
        }
    }
}
