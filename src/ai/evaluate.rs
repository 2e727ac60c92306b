use crate::game::{Board, Cell, Symbol, COLS, ROWS};

use super::node::SearchNode;
use super::search::{column_bonus, MIDDLE_COLUMN};

/// Score of a position the calling player has won. Kept below `i32::MAX` by
/// the middle column's bonus so the parent can add one bonus on top.
pub const WIN_SCORE: i32 = i32::MAX - column_bonus(MIDDLE_COLUMN);
/// Score of a lost position or an illegal move.
pub const LOSS_SCORE: i32 = i32::MIN;
pub const DRAW_SCORE: i32 = 0;

/// Extra points for a scoreable horizontal or vertical run of three or more.
const LONG_RUN_BONUS: i32 = 3;

/// Trait for evaluating a non-terminal board from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Symbol) -> i32;
}

/// Rewards the player's own runs that still have room to reach the run
/// length. Opponents' runs are never penalised.
pub struct StreakHeuristic;

impl StreakHeuristic {
    /// Points for a run of `streak` own counters with `spaces` empty cells
    /// seen alongside it.
    fn score_streak(run_length: usize, streak: usize, spaces: usize, weighted: bool) -> i32 {
        if streak <= 1 || run_length.saturating_sub(streak) > spaces {
            return 0;
        }
        let mut score = streak as i32;
        if weighted && streak >= 3 {
            score += LONG_RUN_BONUS;
        }
        score
    }

    fn vertical(board: &Board, own: Cell) -> i32 {
        let n = board.run_length();
        let mut score = 0;

        for col in 0..COLS {
            let mut streak = 0;
            let mut spaces = 0;
            for row in (0..ROWS).rev() {
                match board.get(row, col) {
                    Cell::Empty => spaces += 1,
                    c if c == own => streak += 1,
                    _ => streak = 0,
                }
            }
            score += Self::score_streak(n, streak, spaces, true);
        }

        score
    }

    fn horizontal(board: &Board, own: Cell) -> i32 {
        let n = board.run_length();
        let mut score = 0;

        for row in (0..ROWS).rev() {
            let mut streak = 0;
            let mut spaces = 0;
            for col in 0..COLS {
                match board.get(row, col) {
                    c if c == own => streak += 1,
                    Cell::Empty => spaces += 1,
                    _ => {
                        // An opposing counter closes the window
                        score += Self::score_streak(n, streak, spaces, true);
                        streak = 0;
                        spaces = 0;
                    }
                }
            }
            score += Self::score_streak(n, streak, spaces, true);
        }

        score
    }

    /// Walk up the board from every own or empty cell, stepping `dc` columns
    /// per row, until an opposing counter or the edge.
    fn diagonal(board: &Board, own: Cell, dc: isize) -> i32 {
        let n = board.run_length();
        let mut score = 0;

        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let start = board.get(row, col);
                if start != own && start != Cell::Empty {
                    continue;
                }

                let mut streak = 0;
                let mut spaces = 0;
                let (mut r, mut c) = (row as isize, col as isize);
                while r >= 0 && c >= 0 && c < COLS as isize {
                    match board.get(r as usize, c as usize) {
                        x if x == own => streak += 1,
                        Cell::Empty => spaces += 1,
                        _ => break,
                    }
                    r -= 1;
                    c += dc;
                }
                score += Self::score_streak(n, streak, spaces, false);
            }
        }

        score
    }
}

impl Heuristic for StreakHeuristic {
    fn evaluate(&self, board: &Board, player: Symbol) -> i32 {
        let own = player.to_cell();

        Self::vertical(board, own)
            + Self::horizontal(board, own)
            + Self::diagonal(board, own, 1)
            + Self::diagonal(board, own, -1)
    }
}

/// Score a node where the search stops, from `caller`'s point of view.
///
/// Illegal moves score as a loss and draws as zero. A win by any symbol in
/// `turn_order` is exact, with later symbols taking precedence; anything
/// else falls through to the heuristic.
pub fn score_leaf<H: Heuristic + ?Sized>(
    node: &SearchNode,
    caller: Symbol,
    turn_order: &[Symbol],
    heuristic: &H,
) -> i32 {
    if !node.is_usable() {
        return LOSS_SCORE;
    }

    let board = node.board();
    if board.is_draw() {
        return DRAW_SCORE;
    }

    let mut exact = None;
    for &symbol in turn_order {
        if board.check_win(symbol) {
            exact = Some(if symbol == caller { WIN_SCORE } else { LOSS_SCORE });
        }
    }

    exact.unwrap_or_else(|| heuristic.evaluate(board, caller))
}
