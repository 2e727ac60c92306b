use std::fmt;

use super::Symbol;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Counters needed in a line when no valid run length is configured.
pub const DEFAULT_RUN_LENGTH: usize = 4;
pub const MIN_RUN_LENGTH: usize = 2;
pub const MAX_RUN_LENGTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
    Blue,
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => Symbol::Red.glyph(),
            Cell::Yellow => Symbol::Yellow.glyph(),
            Cell::Blue => Symbol::Blue.glyph(),
        }
    }
}

/// Fixed 6x7 grid. Copying a board copies every cell; nothing is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    run_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// Clamp a requested run length into the playable range.
pub fn effective_run_length(requested: usize) -> usize {
    if (MIN_RUN_LENGTH..=MAX_RUN_LENGTH).contains(&requested) {
        requested
    } else {
        DEFAULT_RUN_LENGTH
    }
}

impl Board {
    /// Create an empty board where `run_length` counters in a row win.
    /// Values outside 2..=7 fall back to 4.
    pub fn new(run_length: usize) -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            run_length: effective_run_length(run_length),
        }
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a counter in a column, returns the row where it landed.
    /// A full column is left untouched.
    pub fn drop_piece(&mut self, col: usize, symbol: Symbol) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = symbol.to_cell();
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// No column has room left. Gravity guarantees a full top row means a
    /// full board.
    pub fn is_draw(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether `symbol` holds `run_length` consecutive cells anywhere.
    pub fn check_win(&self, symbol: Symbol) -> bool {
        let cell = symbol.to_cell();

        self.check_horizontal(cell)
            || self.check_vertical(cell)
            || self.check_diagonal_up(cell)
            || self.check_diagonal_down(cell)
    }

    fn check_horizontal(&self, cell: Cell) -> bool {
        for row in 0..ROWS {
            let mut count = 0;
            for col in 0..COLS {
                if self.cells[row][col] == cell {
                    count += 1;
                    if count >= self.run_length {
                        return true;
                    }
                } else {
                    count = 0;
                }
            }
        }
        false
    }

    fn check_vertical(&self, cell: Cell) -> bool {
        for col in 0..COLS {
            let mut count = 0;
            for row in 0..ROWS {
                if self.cells[row][col] == cell {
                    count += 1;
                    if count >= self.run_length {
                        return true;
                    }
                } else {
                    count = 0;
                }
            }
        }
        false
    }

    /// Ascending diagonal (/): anchor at the lower-left end of every window
    /// that fits on the board.
    fn check_diagonal_up(&self, cell: Cell) -> bool {
        let n = self.run_length;
        for col in 0..=COLS - n {
            for row in (n - 1)..ROWS {
                if (0..n).all(|i| self.cells[row - i][col + i] == cell) {
                    return true;
                }
            }
        }
        false
    }

    /// Descending diagonal (\): anchor at the lower-right end of every window.
    fn check_diagonal_down(&self, cell: Cell) -> bool {
        let n = self.run_length;
        for col in (n - 1)..COLS {
            for row in (n - 1)..ROWS {
                if (0..n).all(|i| self.cells[row - i][col - i] == cell) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_RUN_LENGTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "| {} ", cell.glyph())?;
            }
            writeln!(f, "|")?;
        }
        for col in 1..=COLS {
            write!(f, "  {} ", col)?;
        }
        Ok(())
    }
}
