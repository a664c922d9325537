//! Positional evaluation using a fixed square-weight table

use othello_core::{Board, Cell, BOARD_SIZE};

/// Square weights indexed `[y][x]`: corners are prized, the squares next to
/// them are penalised, edges are mildly good.
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 0, 0, 0, 0, -2, 10],
    [5, -2, 0, 0, 0, 0, -2, 5],
    [5, -2, 0, 0, 0, 0, -2, 5],
    [10, -2, 0, 0, 0, 0, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Evaluates the position from Black's perspective.
///
/// Sum of the weights under Black discs minus the sum under White discs:
/// - Positive = good for Black
/// - Negative = good for White
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for (y, row) in board.cells().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            match cell {
                Cell::Black => score += WEIGHTS[y][x],
                Cell::White => score -= WEIGHTS[y][x],
                Cell::Empty => {}
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::Color;

    #[test]
    fn test_opening_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_table_is_symmetric() {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                assert_eq!(WEIGHTS[y][x], WEIGHTS[x][y]);
                assert_eq!(WEIGHTS[y][x], WEIGHTS[BOARD_SIZE - 1 - y][x]);
            }
        }
    }

    #[test]
    fn test_corner_and_x_square() {
        let mut board = Board::empty(Color::Black);
        board.set(0, 0, Cell::Black);
        assert_eq!(evaluate(&board), 100);

        board.set(1, 1, Cell::White);
        assert_eq!(evaluate(&board), 150);
    }
}
