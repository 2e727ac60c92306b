use std::io::{self, BufRead, Write};

use crate::error::AgentError;
use crate::game::{Board, GameState, COLS};

use super::agent::Agent;

/// Where a human's typed lines come from.
pub trait LineInput {
    /// Append one line to `buf`, returning 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Stdin locks per line, so several human seats can share it
impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl LineInput for io::Empty {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A person typing column numbers (1 to 7) on a line-based input.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<io::Stdin, io::Stdout> {
    /// Read moves from stdin and complain on stdout.
    pub fn stdio() -> Self {
        HumanAgent::new(io::stdin(), io::stdout())
    }
}

impl HumanAgent<io::Empty, io::Sink> {
    /// A human seat whose moves arrive through some other channel, such as
    /// key presses in the terminal UI.
    pub fn detached() -> Self {
        HumanAgent::new(io::empty(), io::sink())
    }
}

impl<R: LineInput, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }
}

/// Parse a one-based column typed by a player. Returns the zero-based index
/// when the column exists and has room.
pub fn parse_column(text: &str, board: &Board) -> Option<usize> {
    let column: usize = text.trim().parse().ok()?;
    if (1..=COLS).contains(&column) && !board.is_column_full(column - 1) {
        Some(column - 1)
    } else {
        None
    }
}

impl<R: LineInput, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }
            match parse_column(&line, state.board()) {
                Some(col) => return Ok(col),
                None => writeln!(self.output, "Please enter a valid column.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_human(&self) -> bool {
        true
    }
}
