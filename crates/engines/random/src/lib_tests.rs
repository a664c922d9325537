use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::new();

    for _ in 0..50 {
        let result = engine.search(&board);
        let mv = result.best_move.expect("opening has legal moves");
        assert!(board.is_legal_move(mv.x as usize, mv.y as usize));
    }
}

#[test]
fn random_engine_passes_without_moves() {
    let mut engine = RandomEngine::new();
    let board: Board = "BBB..... ........ ........ ........ ........ ........ ........ BW...... w"
        .parse()
        .unwrap();

    let result = engine.search(&board);

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engines_agree() {
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);
    let mut board = Board::new();

    for _ in 0..10 {
        let ma = a.search(&board).best_move;
        let mb = b.search(&board).best_move;
        assert_eq!(ma, mb);
        let Some(mv) = ma else { break };
        board.place_piece(mv.x as usize, mv.y as usize);
    }
}
