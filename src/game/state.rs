use super::{Board, Symbol, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Symbol),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

impl From<super::board::MoveError> for MoveError {
    fn from(e: super::board::MoveError) -> Self {
        match e {
            super::board::MoveError::ColumnFull => MoveError::ColumnFull,
            super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// The real game: one board, the players' symbols in turn order, and whose
/// turn it is.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    turn_order: Vec<Symbol>,
    current: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state. The first symbol in `turn_order` starts.
    pub fn new(run_length: usize, turn_order: &[Symbol]) -> Self {
        assert!(!turn_order.is_empty(), "a game needs at least one player");
        GameState {
            board: Board::new(run_length),
            turn_order: turn_order.to_vec(),
            current: 0,
            outcome: None,
        }
    }

    /// Standard three-player game with the default run length.
    pub fn initial() -> Self {
        Self::new(super::DEFAULT_RUN_LENGTH, &Symbol::ALL)
    }

    /// Get current player
    pub fn current_player(&self) -> Symbol {
        self.turn_order[self.current]
    }

    pub fn turn_order(&self) -> &[Symbol] {
        &self.turn_order
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. The mover is checked for a win first, then the
    /// board for a draw.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let symbol = self.current_player();
        self.board.drop_piece(column, symbol)?;

        if self.board.check_win(symbol) {
            self.outcome = Some(GameOutcome::Winner(symbol));
        } else if self.board.is_draw() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current = (self.current + 1) % self.turn_order.len();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Symbol::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
        assert_eq!(state.board().run_length(), 4);
    }

    #[test]
    fn test_turns_cycle_through_three_players() {
        let mut state = GameState::initial();
        let mut seen = Vec::new();
        for col in 0..4 {
            seen.push(state.current_player());
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(
            seen,
            vec![Symbol::Red, Symbol::Yellow, Symbol::Blue, Symbol::Red]
        );
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let state = GameState::initial();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Symbol::Yellow);
        assert_eq!(next.board().get(5, 3), Cell::Red);
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.apply_move_mut(0).unwrap();
        }
        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull));
        assert!(!state.legal_actions().contains(&0));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new(3, &Symbol::ALL);

        // Red takes the bottom row 0..3, the others stack on top of each other
        for col in 0..3 {
            state.apply_move_mut(col).unwrap(); // Red
            if col < 2 {
                state.apply_move_mut(6).unwrap(); // Yellow
                state.apply_move_mut(5).unwrap(); // Blue
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Symbol::Red)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        // With a run length of seven only a full row can win. Filling row by
        // row with three players rotates the symbols along every row.
        let mut state = GameState::new(7, &Symbol::ALL);
        for _ in 0..ROWS {
            for col in 0..COLS {
                assert!(!state.is_terminal());
                state.apply_move_mut(col).unwrap();
            }
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
