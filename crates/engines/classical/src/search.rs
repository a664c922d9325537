//! Minimax search with alpha-beta pruning

use othello_core::{legal_moves, Board, Move};

use crate::eval::evaluate;

/// Plies searched below each candidate root move.
pub const SEARCH_DEPTH: u8 = 3;

/// Picks the move with the strictly greatest minimax score. Scores are
/// Black-positive for either mover, as [`evaluate`] returns them.
/// Candidates are tried in row-major order, so the first one found wins
/// ties.
///
/// # Arguments
/// * `board` - The position to search; it is never mutated
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` when the side to move has no legal move and must pass
pub fn choose_move(board: &Board, nodes: &mut u64) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for mv in legal_moves(board, board.current_player()) {
        let mut child = board.clone();
        let (x, y) = mv.coords();
        child.place_piece(x, y);
        *nodes += 1;

        let score = minimax(&child, SEARCH_DEPTH, false, i32::MIN, i32::MAX, nodes);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Leaves are scored with [`evaluate`]. A node whose side to move has no
/// legal move is scored statically instead of modelling the pass.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board, board.current_player());
    if moves.is_empty() {
        return evaluate(board);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = board.clone();
        let (x, y) = mv.coords();
        child.place_piece(x, y);
        *nodes += 1;

        let score = minimax(&child, depth - 1, !maximizing, alpha, beta, nodes);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break; // Cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
