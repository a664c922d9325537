pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Disc color held by this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// Final classification of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GameResult {
    #[default]
    None,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameResult {
    /// Classifies a finished game strictly by disc count.
    pub fn from_counts(black: u32, white: u32) -> GameResult {
        use std::cmp::Ordering;
        match black.cmp(&white) {
            Ordering::Greater => GameResult::BlackWins,
            Ordering::Less => GameResult::WhiteWins,
            Ordering::Equal => GameResult::Draw,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::None | GameResult::Draw => None,
        }
    }
}

/// Outcome of a mobility check for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The side to move has at least one legal move.
    Continue,
    /// The side to move is stuck but its opponent can move.
    Pass,
    /// Neither side can move.
    GameOver(GameResult),
}

/// A disc placement at column `x`, row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: u8, // column 0..7
    pub y: u8, // row 0..7
}

impl Move {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn coords(self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&move_to_coord(*self))
    }
}

// Helpers
pub fn move_to_coord(mv: Move) -> String {
    let col = (b'a' + mv.x) as char;
    let row = (b'1' + mv.y) as char;
    format!("{col}{row}")
}

pub fn coord_to_move(c: &str) -> Option<Move> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0].to_ascii_lowercase();
    let row = b[1];
    if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
        return None;
    }
    Some(Move::new(col - b'a', row - b'1'))
}
