use log::debug;

use crate::game::{Board, Symbol, COLS};

use super::evaluate::{score_leaf, Heuristic, StreakHeuristic, LOSS_SCORE, WIN_SCORE};
use super::node::SearchNode;

/// Plies the bots look ahead.
pub const SEARCH_DEPTH: usize = 6;

/// Index of the centre column.
pub const MIDDLE_COLUMN: usize = COLS / 2;

/// Bias toward central play: 3 for the middle column, then 2, 1 and 0 as
/// columns move away from it.
pub const fn column_bonus(col: usize) -> i32 {
    match col.abs_diff(MIDDLE_COLUMN) {
        0 => 3,
        1 => 2,
        2 => 1,
        _ => 0,
    }
}

/// Result of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Column with the best adjusted value, or `None` when the starting
    /// position was already a leaf.
    pub column: Option<usize>,
    pub value: i32,
    /// Nodes visited, the root included.
    pub nodes: u64,
}

/// Depth-limited minimax for up to three players.
///
/// The calling player maximises; every other player is folded into a single
/// minimising side. Nothing is cached between calls.
pub struct Minimax<H = StreakHeuristic> {
    caller: Symbol,
    turn_order: Vec<Symbol>,
    heuristic: H,
    nodes: u64,
}

impl Minimax<StreakHeuristic> {
    pub fn new(caller: Symbol, turn_order: &[Symbol]) -> Self {
        Self::with_heuristic(caller, turn_order, StreakHeuristic)
    }
}

impl<H: Heuristic> Minimax<H> {
    pub fn with_heuristic(caller: Symbol, turn_order: &[Symbol], heuristic: H) -> Self {
        assert!(
            turn_order.contains(&caller),
            "caller {} is not in the turn order",
            caller.name()
        );
        Minimax {
            caller,
            turn_order: turn_order.to_vec(),
            heuristic,
            nodes: 0,
        }
    }

    /// Search `depth` plies ahead of `board` and pick the caller's column.
    ///
    /// The column is not guaranteed to be playable: when every legal move
    /// loses, a full column can come out on top and the caller must choose
    /// another one.
    pub fn choose_column(&mut self, board: &Board, depth: usize) -> SearchOutcome {
        self.nodes = 0;
        let root = SearchNode::root(board);
        let (value, column) = self.search(&root, depth, self.caller);

        debug!(
            "{} search depth {}: column {:?} value {} after {} nodes",
            self.caller.name(),
            depth,
            column,
            value,
            self.nodes
        );

        SearchOutcome {
            column,
            value,
            nodes: self.nodes,
        }
    }

    fn search(&mut self, node: &SearchNode, depth: usize, player: Symbol) -> (i32, Option<usize>) {
        self.nodes += 1;

        if depth == 0 || node.is_game_over(&self.turn_order) || !node.is_usable() {
            let value = score_leaf(node, self.caller, &self.turn_order, &self.heuristic);
            return (value, None);
        }

        let maximizing = player == self.caller;
        let next = player.next_in(&self.turn_order);
        let mut best = if maximizing { LOSS_SCORE } else { WIN_SCORE };
        let mut best_column = None;

        for col in 0..COLS {
            let child = node.child(col, player);
            let (value, _) = self.search(&child, depth - 1, next);
            // Scores wrap like 32-bit integers; win scores leave room for one bonus
            let value = value.wrapping_add(column_bonus(col));

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
            // Equal values move the choice to the later column
            if best == value {
                best_column = Some(col);
            }
        }

        (best, best_column)
    }
}
