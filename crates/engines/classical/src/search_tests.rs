use super::*;
use othello_core::{Board, Color, TurnStatus};
use proptest::prelude::*;

/// Minimax without pruning, same move order and leaf rules.
fn full_width(board: &Board, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }
    let moves = legal_moves(board, board.current_player());
    if moves.is_empty() {
        return evaluate(board);
    }
    let scores = moves.into_iter().map(|mv| {
        let mut child = board.clone();
        let (x, y) = mv.coords();
        child.place_piece(x, y);
        full_width(&child, depth - 1, !maximizing)
    });
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn playout(choices: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in choices {
        match board.turn_status() {
            TurnStatus::GameOver(_) => break,
            TurnStatus::Pass => board.pass_turn(),
            TurnStatus::Continue => {}
        }
        let moves = legal_moves(&board, board.current_player());
        let (x, y) = moves[choice % moves.len()].coords();
        board.place_piece(x, y);
    }
    board
}

#[test]
fn test_choose_move_opening_is_legal() {
    let board = Board::new();
    let mut nodes = 0;
    let (mv, _) = choose_move(&board, &mut nodes).unwrap();
    assert!(board.is_legal_move(mv.x as usize, mv.y as usize));
    assert!(nodes > 0);
}

#[test]
fn test_choose_move_is_deterministic_for_white() {
    let mut board = Board::new();
    assert!(board.place_piece(2, 3));
    assert_eq!(board.current_player(), Color::White);

    let mut nodes_a = 0;
    let mut nodes_b = 0;
    let first = choose_move(&board, &mut nodes_a);
    let second = choose_move(&board, &mut nodes_b);
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(nodes_a, nodes_b);
}

#[test]
fn test_choose_move_does_not_touch_board() {
    let board = Board::new();
    let before = board.clone();
    let mut nodes = 0;
    choose_move(&board, &mut nodes);
    assert_eq!(board, before);
}

#[test]
fn test_no_legal_move_returns_none() {
    let board: Board = "BBB..... ........ ........ ........ ........ ........ ........ BW...... w"
        .parse()
        .unwrap();
    let mut nodes = 0;
    assert_eq!(choose_move(&board, &mut nodes), None);
    assert_eq!(nodes, 0);
}

#[test]
fn test_prefers_corner() {
    // Black can capture g7 from h7, g8 or the h8 corner; h8 is tried last
    let board: Board = "........
                        ........
                        ........
                        ........
                        ........
                        .....BB.
                        .....BW.
                        ........ b"
        .parse()
        .unwrap();
    let mut nodes = 0;
    let (mv, score) = choose_move(&board, &mut nodes).unwrap();
    assert_eq!(mv, Move::new(7, 7));
    assert_eq!(score, 46);
}

#[test]
fn test_white_reply_after_c4() {
    // Scores stay Black-positive when White is the mover
    let mut board = Board::new();
    assert!(board.place_piece(2, 3));
    let mut nodes = 0;
    let (mv, score) = choose_move(&board, &mut nodes).unwrap();
    assert_eq!(mv, Move::new(4, 2));
    assert_eq!(mv.to_string(), "e3");
    assert_eq!(score, -2);
}

#[test]
fn test_depth_zero_is_static_eval() {
    let board = Board::new();
    let mut nodes = 0;
    assert_eq!(
        minimax(&board, 0, true, i32::MIN, i32::MAX, &mut nodes),
        0
    );
    assert_eq!(nodes, 0);
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let board = playout(&[3, 1, 4, 1, 5, 9, 2, 6]);
    let mut nodes = 0;
    minimax(&board, 4, true, i32::MIN, i32::MAX, &mut nodes);

    fn count_full(board: &Board, depth: u8) -> u64 {
        if depth == 0 {
            return 0;
        }
        legal_moves(board, board.current_player())
            .into_iter()
            .map(|mv| {
                let mut child = board.clone();
                let (x, y) = mv.coords();
                child.place_piece(x, y);
                1 + count_full(&child, depth - 1)
            })
            .sum()
    }

    assert!(nodes < count_full(&board, 4));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_alpha_beta_matches_full_width(
        choices in prop::collection::vec(0usize..64, 0..30),
        depth in 1u8..=3,
        maximizing: bool,
    ) {
        let board = playout(&choices);
        let mut nodes = 0;
        let pruned = minimax(&board, depth, maximizing, i32::MIN, i32::MAX, &mut nodes);
        prop_assert_eq!(pruned, full_width(&board, depth, maximizing));
    }

    #[test]
    fn prop_choose_move_matches_full_width(choices in prop::collection::vec(0usize..64, 0..20)) {
        let board = playout(&choices);
        let mut nodes = 0;
        let chosen = choose_move(&board, &mut nodes);

        let mut expected: Option<(Move, i32)> = None;
        for mv in legal_moves(&board, board.current_player()) {
            let mut child = board.clone();
            let (x, y) = mv.coords();
            child.place_piece(x, y);
            let score = full_width(&child, SEARCH_DEPTH, false);
            if expected.map_or(true, |(_, s)| score > s) {
                expected = Some((mv, score));
            }
        }
        prop_assert_eq!(chosen, expected);
    }
}
