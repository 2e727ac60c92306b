//! Move sources: the `Agent` trait, the minimax engine behind the bots, its
//! position evaluator, and the human and random players.

mod agent;
mod bot;
pub mod evaluate;
mod human;
mod node;
mod random;
pub mod search;

pub use agent::Agent;
pub use bot::BotAgent;
pub use evaluate::{score_leaf, Heuristic, StreakHeuristic, LOSS_SCORE, WIN_SCORE};
pub use human::{parse_column, HumanAgent, LineInput};
pub use node::SearchNode;
pub use random::RandomAgent;
pub use search::{column_bonus, Minimax, SearchOutcome, SEARCH_DEPTH};
