use log::warn;

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::Agent;
use super::random::RandomAgent;
use super::search::{Minimax, SEARCH_DEPTH};

/// Computer player: minimax for the player to move, with a random legal
/// column whenever the search settles on a full one.
pub struct BotAgent {
    depth: usize,
    fallback: RandomAgent,
}

impl BotAgent {
    pub fn new() -> Self {
        Self::with_fallback(SEARCH_DEPTH, RandomAgent::new())
    }

    pub fn with_fallback(depth: usize, fallback: RandomAgent) -> Self {
        BotAgent { depth, fallback }
    }
}

impl Default for BotAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for BotAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let player = state.current_player();
        let mut engine = Minimax::new(player, state.turn_order());
        let outcome = engine.choose_column(state.board(), self.depth);

        match outcome.column {
            Some(col) if !state.board().is_column_full(col) => Ok(col),
            chosen => {
                warn!(
                    "{} search chose unplayable column {:?}, picking at random",
                    player.name(),
                    chosen
                );
                self.fallback.select_action(state)
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
