//! Core Connect N game logic: board representation, player symbols, the game
//! state machine and the turn loop that drives agents against it.

mod board;
mod player;
mod session;
mod state;

pub use board::{
    effective_run_length, Board, Cell, COLS, DEFAULT_RUN_LENGTH, MAX_RUN_LENGTH, MIN_RUN_LENGTH,
    ROWS,
};
pub use player::{Symbol, SymbolRegistry};
pub use session::{Seat, Session, Turn};
pub use state::{GameOutcome, GameState, MoveError};
