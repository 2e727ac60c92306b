use log::info;

use super::{GameOutcome, GameState, MoveError, Symbol, SymbolRegistry};
use crate::ai::Agent;
use crate::error::{PlayerError, SessionError};

/// A player at the table: their counter and whatever chooses their moves.
pub struct Seat {
    pub symbol: Symbol,
    pub agent: Box<dyn Agent>,
}

/// One move as it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Symbol,
    pub column: usize,
    pub outcome: Option<GameOutcome>,
}

/// Drives one game: asks the seat whose turn it is for a column and applies
/// it to the real board.
pub struct Session {
    state: GameState,
    seats: Vec<Seat>,
}

impl Session {
    /// Seat `agents` in order, each receiving the next free symbol. Fails when
    /// there are more agents than symbols.
    pub fn new(run_length: usize, agents: Vec<Box<dyn Agent>>) -> Result<Self, PlayerError> {
        if agents.is_empty() {
            return Err(PlayerError::NoPlayers);
        }

        let mut registry = SymbolRegistry::new();
        let mut seats = Vec::with_capacity(agents.len());
        for agent in agents {
            let symbol = registry.next_symbol()?;
            seats.push(Seat { symbol, agent });
        }

        Ok(Session {
            state: GameState::new(run_length, registry.assigned()),
            seats,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> &Seat {
        &self.seats[self.seat_index(self.state.current_player())]
    }

    // Every symbol in the turn order came from a seat
    fn seat_index(&self, symbol: Symbol) -> usize {
        self.seats
            .iter()
            .position(|seat| seat.symbol == symbol)
            .unwrap_or(0)
    }

    /// Start over on an empty board with the same seats.
    pub fn restart(&mut self) {
        let turn_order: Vec<Symbol> = self.seats.iter().map(|seat| seat.symbol).collect();
        self.state = GameState::new(self.state.board().run_length(), &turn_order);
    }

    /// Play a column chosen outside the agents, e.g. from a key press.
    pub fn apply_move(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        let player = self.state.current_player();
        self.state.apply_move_mut(column)?;
        if let Some(outcome) = self.state.outcome() {
            log_outcome(outcome, player);
        }
        Ok(self.state.outcome())
    }

    /// Ask the current seat's agent for a move and play it.
    pub fn play_turn(&mut self) -> Result<Turn, SessionError> {
        let player = self.state.current_player();
        let index = self.seat_index(player);
        let column = self.seats[index]
            .agent
            .select_action(&self.state)
            .map_err(|source| SessionError::Agent {
                player: player.name(),
                source,
            })?;

        let outcome = self
            .apply_move(column)
            .map_err(|reason| SessionError::IllegalMove {
                player: player.name(),
                column,
                reason,
            })?;

        Ok(Turn {
            player,
            column,
            outcome,
        })
    }

    /// Play turns until the game ends. `after_move` sees the state after
    /// every move together with the move itself.
    pub fn play(
        &mut self,
        mut after_move: impl FnMut(&GameState, &Turn),
    ) -> Result<GameOutcome, SessionError> {
        loop {
            let turn = self.play_turn()?;
            after_move(&self.state, &turn);
            if let Some(outcome) = turn.outcome {
                return Ok(outcome);
            }
        }
    }
}

fn log_outcome(outcome: GameOutcome, last_player: Symbol) {
    match outcome {
        GameOutcome::Winner(symbol) => info!("{} wins", symbol.name()),
        GameOutcome::Draw => info!("draw after {}'s move", last_player.name()),
    }
}
