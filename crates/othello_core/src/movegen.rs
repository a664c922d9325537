use crate::{board::Board, types::*};

/// Appends every legal move for `color` to `out`, in row-major order.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if board.is_legal_move_for(x, y, color) {
                out.push(Move::new(x as u8, y as u8));
            }
        }
    }
}

pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    legal_moves_into(board, color, &mut moves);
    moves
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
