use crate::game::{Board, Symbol};

/// One hypothetical position explored during lookahead. Each node owns its
/// own copy of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    board: Board,
    usable: bool,
}

impl SearchNode {
    /// Snapshot of the real board to start a search from.
    pub fn root(board: &Board) -> Self {
        SearchNode {
            board: *board,
            usable: true,
        }
    }

    /// The position after `symbol` drops into `col`. A full column yields an
    /// unusable node holding the unchanged grid.
    pub fn child(&self, col: usize, symbol: Symbol) -> Self {
        let mut board = self.board;
        let usable = board.drop_piece(col, symbol).is_ok();
        SearchNode { board, usable }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Drawn, or won by any of `symbols`.
    pub fn is_game_over(&self, symbols: &[Symbol]) -> bool {
        self.board.is_draw() || symbols.iter().any(|&s| self.board.check_win(s))
    }
}
