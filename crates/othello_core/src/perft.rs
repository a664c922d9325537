use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Leaf count of the move tree below `board`, `depth` plies deep.
///
/// A forced pass consumes a ply; a finished game counts as a single leaf.
pub fn perft(board: &Board, depth: u8) -> u64 {
    fn inner(board: &Board, depth: u8, passed: bool, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        buf.clear();
        legal_moves_into(board, board.current_player(), buf);

        if buf.is_empty() {
            if passed {
                return 1;
            }
            let mut next = board.clone();
            next.pass_turn();
            return inner(&next, depth - 1, true, rest);
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut next = board.clone();
            let (x, y) = mv.coords();
            next.place_piece(x, y);
            nodes += inner(&next, depth - 1, false, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, depth, false, &mut layers[..])
}
