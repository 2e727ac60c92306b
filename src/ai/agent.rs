use crate::error::AgentError;
use crate::game::GameState;

/// Anything that can pick a column for the player whose turn it is.
pub trait Agent {
    /// Select a column (zero-based) for `state.current_player()`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Human agents are driven by input the caller collects itself.
    fn is_human(&self) -> bool {
        false
    }
}
