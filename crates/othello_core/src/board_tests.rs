use super::*;

fn board(rows: &str) -> Board {
    rows.parse().expect("test board should parse")
}

#[test]
fn test_new_board_layout() {
    let b = Board::new();
    assert_eq!(b.cell(3, 3), Cell::White);
    assert_eq!(b.cell(4, 3), Cell::Black);
    assert_eq!(b.cell(3, 4), Cell::Black);
    assert_eq!(b.cell(4, 4), Cell::White);
    assert_eq!(b.disc_counts(), (2, 2));
    assert_eq!(b.empty_count(), 60);
    assert_eq!(b.current_player(), Color::Black);
}

#[test]
fn test_within_bounds() {
    assert!(Board::is_within_bounds(0, 0));
    assert!(Board::is_within_bounds(7, 7));
    assert!(!Board::is_within_bounds(-1, 0));
    assert!(!Board::is_within_bounds(0, 8));
    assert!(!Board::is_within_bounds(8, 3));
}

#[test]
fn test_opening_move_flips_center() {
    let mut b = Board::new();
    assert!(b.place_piece(2, 3));
    assert_eq!(b.cell(2, 3), Cell::Black);
    assert_eq!(b.cell(3, 3), Cell::Black);
    assert_eq!(b.disc_counts(), (4, 1));
    assert_eq!(b.current_player(), Color::White);
}

#[test]
fn test_illegal_move_is_noop() {
    let mut b = Board::new();
    let before = b.clone();

    // Occupied cell
    assert!(!b.place_piece(3, 3));
    // Empty but captures nothing
    assert!(!b.place_piece(0, 0));
    // Out of range
    assert!(!b.place_piece(8, 2));

    assert_eq!(b, before);
}

#[test]
fn test_adjacent_own_disc_is_not_a_capture() {
    // Black at b1 next to Black at a1: no opponent disc crossed
    let b = board(
        "B.......
         ........
         ........
         ........
         ........
         ........
         ........
         .......W b",
    );
    assert!(!b.can_flip_in_direction(1, 0, -1, 0, Color::Black));
    assert!(!b.is_legal_move(1, 0));
}

#[test]
fn test_run_must_end_on_own_disc() {
    // Left of c1 is W, W, then the edge
    let b = board(
        "WW......
         ........
         ........
         ........
         ........
         ........
         ........
         ........ b",
    );
    assert!(!b.can_flip_in_direction(2, 0, -1, 0, Color::Black));
    assert!(!b.has_any_legal_move(Color::Black));
}

#[test]
fn test_multi_direction_flips() {
    // Black plays d4 and captures horizontally and vertically
    let b_text = "........
                  ...B....
                  ...W....
                  .BW.WB..
                  ...W....
                  ...B....
                  ........
                  ........ b";
    let mut b = board(b_text);
    assert_eq!(b.apply_flips(3, 3), 4);
    // apply_flips does not place or pass
    assert_eq!(b.cell(3, 3), Cell::Empty);
    assert_eq!(b.current_player(), Color::Black);

    let mut b = board(b_text);
    assert!(b.place_piece(3, 3));
    assert_eq!(b.disc_counts(), (9, 0));
    assert_eq!(b.current_player(), Color::White);
}

#[test]
fn test_query_does_not_mutate() {
    let b = Board::new();
    let before = b.clone();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let _ = b.is_legal_move(x, y);
            let _ = b.is_legal_move_for(x, y, Color::White);
        }
    }
    assert!(b.has_any_legal_move(Color::White));
    assert_eq!(b, before);
    assert_eq!(b.current_player(), Color::Black);
}

#[test]
fn test_clone_independence() {
    let original = Board::new();
    let mut copy = original.clone();
    assert!(copy.place_piece(3, 2));
    assert_eq!(original, Board::new());
    assert_ne!(copy, original);
    assert_eq!(original.current_player(), Color::Black);
}

#[test]
fn test_side_changes_only_by_move_or_pass() {
    let mut b: Board = "BBB..... ........ ........ ........ ........ ........ ........ BW...... w"
        .parse()
        .unwrap();
    let before = b.clone();

    // Mobility checks for either color leave the side to move alone
    assert_eq!(b.turn_status(), TurnStatus::Pass);
    assert!(b.has_any_legal_move(Color::Black));
    assert_eq!(b, before);

    b.pass_turn();
    assert_eq!(b.current_player(), Color::Black);
    assert!(b.place_piece(2, 7));
    assert_eq!(b.current_player(), Color::White);
}

#[test]
fn test_turn_status_continue_on_opening() {
    assert_eq!(Board::new().turn_status(), TurnStatus::Continue);
}

#[test]
fn test_turn_status_pass() {
    // White to move with no capture, Black can still take c8
    let b = board(
        "BBB.....
         ........
         ........
         ........
         ........
         ........
         ........
         BW...... w",
    );
    assert!(!b.has_any_legal_move(Color::White));
    assert!(b.has_any_legal_move(Color::Black));
    assert_eq!(b.turn_status(), TurnStatus::Pass);
}

#[test]
fn test_turn_status_game_over_by_count() {
    let b = board(
        "BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW w",
    );
    assert_eq!(b.disc_counts(), (34, 30));
    assert_eq!(b.turn_status(), TurnStatus::GameOver(GameResult::BlackWins));

    let b = board(
        "BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW b",
    );
    assert_eq!(b.turn_status(), TurnStatus::GameOver(GameResult::Draw));
}

#[test]
fn test_display_parse_round_trip() {
    let mut b = Board::new();
    b.place_piece(4, 5);
    let text = b.to_string();
    assert!(text.ends_with('w'));
    let parsed: Board = text.parse().unwrap();
    assert_eq!(parsed, b);
}

#[test]
fn test_parse_errors() {
    assert_eq!("........".parse::<Board>(), Err(ParseError::RowCount(1)));

    let short = "....... ........ ........ ........ ........ ........ ........ ........";
    assert_eq!(
        short.parse::<Board>(),
        Err(ParseError::RowLength { row: 0, len: 7 })
    );

    let bad_char = "........ ...Z.... ........ ........ ........ ........ ........ ........";
    assert_eq!(
        bad_char.parse::<Board>(),
        Err(ParseError::InvalidCell { row: 1, ch: 'Z' })
    );

    let bad_side = "........ ........ ........ ........ ........ ........ ........ ........ x";
    assert_eq!(
        bad_side.parse::<Board>(),
        Err(ParseError::InvalidSide("x".to_string()))
    );
}
