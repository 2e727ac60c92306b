use crate::error::AgentError;
use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of choices, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(AgentError::NoLegalColumns);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, ROWS};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.apply_move_mut(2).unwrap();
        }
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent = RandomAgent::with_seed(7);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let action = agent.select_action(&state).unwrap();
            state = state.apply_move(action).unwrap();
        }

        assert!(state.outcome().is_some());
        assert!(matches!(
            agent.select_action(&state),
            Err(AgentError::NoLegalColumns)
        ));
    }

    #[test]
    fn test_seeded_agents_agree() {
        let state = GameState::initial();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_action(&state).unwrap(), b.select_action(&state).unwrap());
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
