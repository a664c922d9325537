use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::*;

/// The eight unit directions, scanned row by row.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 8x8 Othello position plus the side to move.
///
/// Cells are stored row-major and addressed as `(x, y)` = (column, row).
/// Cloning yields a fully independent copy, which is what the search relies
/// on for look-ahead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    current_player: Color,
}

impl Board {
    /// Standard opening position, Black to move.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self {
            cells,
            current_player: Color::Black,
        }
    }

    /// Board with no discs at all. Used to build test positions.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: side_to_move,
        }
    }

    pub fn is_within_bounds(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at `(x, y)`. Panics when out of range, like slice indexing.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Hands the turn to the opponent without placing a disc.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Length of the opponent run captured from `(x, y)` along `(dx, dy)`,
    /// or 0 when that direction is not a capture line for `color`.
    fn capture_run(&self, x: i32, y: i32, dx: i32, dy: i32, color: Color) -> usize {
        let opponent = color.other().to_cell();
        let mut cx = x + dx;
        let mut cy = y + dy;
        let mut count = 0;

        while Self::is_within_bounds(cx, cy) && self.cells[cy as usize][cx as usize] == opponent {
            cx += dx;
            cy += dy;
            count += 1;
        }

        if count > 0
            && Self::is_within_bounds(cx, cy)
            && self.cells[cy as usize][cx as usize] == color.to_cell()
        {
            count
        } else {
            0
        }
    }

    /// True if a `color` disc at `(x, y)` would capture along `(dx, dy)`.
    ///
    /// Pure predicate; the origin cell itself is not inspected.
    pub fn can_flip_in_direction(&self, x: usize, y: usize, dx: i32, dy: i32, color: Color) -> bool {
        self.capture_run(x as i32, y as i32, dx, dy, color) > 0
    }

    fn flip_direction(&mut self, x: usize, y: usize, dx: i32, dy: i32, color: Color) -> u32 {
        let run = self.capture_run(x as i32, y as i32, dx, dy, color);
        for i in 1..=run as i32 {
            let cx = (x as i32 + i * dx) as usize;
            let cy = (y as i32 + i * dy) as usize;
            self.cells[cy][cx] = color.to_cell();
        }
        run as u32
    }

    /// Read-only legality check for an explicit acting color.
    pub fn is_legal_move_for(&self, x: usize, y: usize, color: Color) -> bool {
        if x >= BOARD_SIZE || y >= BOARD_SIZE || !self.cells[y][x].is_empty() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| self.can_flip_in_direction(x, y, dx, dy, color))
    }

    /// Read-only legality check for the side to move.
    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        self.is_legal_move_for(x, y, self.current_player)
    }

    /// Flips every run captured by the side to move from `(x, y)`.
    ///
    /// Does not place the disc or change the turn. Returns the number of
    /// flipped discs; an occupied or out-of-range cell flips nothing.
    pub fn apply_flips(&mut self, x: usize, y: usize) -> u32 {
        if x >= BOARD_SIZE || y >= BOARD_SIZE || !self.cells[y][x].is_empty() {
            return 0;
        }
        let color = self.current_player;
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| self.flip_direction(x, y, dx, dy, color))
            .sum()
    }

    /// Plays the side to move at `(x, y)`.
    ///
    /// Illegal targets are ignored and leave the board untouched. On success
    /// the captured runs are flipped, the disc is placed and the turn passes
    /// to the opponent.
    pub fn place_piece(&mut self, x: usize, y: usize) -> bool {
        if !self.is_legal_move(x, y) {
            return false;
        }
        let mover = self.current_player;
        self.apply_flips(x, y);
        self.cells[y][x] = mover.to_cell();
        self.current_player = mover.other();
        true
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        (0..BOARD_SIZE).any(|y| (0..BOARD_SIZE).any(|x| self.is_legal_move_for(x, y, color)))
    }

    /// Mobility of both sides, seen from the side to move.
    pub fn turn_status(&self) -> TurnStatus {
        let mover = self.current_player;
        let mover_can_move = self.has_any_legal_move(mover);
        let opponent_can_move = self.has_any_legal_move(mover.other());

        match (mover_can_move, opponent_can_move) {
            (false, false) => {
                let (black, white) = self.disc_counts();
                TurnStatus::GameOver(GameResult::from_counts(black, white))
            }
            (false, true) => TurnStatus::Pass,
            _ => TurnStatus::Continue,
        }
    }

    pub fn disc_count(&self, color: Color) -> u32 {
        let target = color.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == target).count() as u32
    }

    /// `(black, white)` disc counts.
    pub fn disc_counts(&self) -> (u32, u32) {
        (self.disc_count(Color::Black), self.disc_count(Color::White))
    }

    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight rows of `B`, `W` or `.`, then the side to move (`b` or `w`).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        match self.current_player {
            Color::Black => write!(f, "b"),
            Color::White => write!(f, "w"),
        }
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses the `Display` format. Rows are whitespace separated and the
    /// side token is optional (Black to move when omitted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() < BOARD_SIZE || tokens.len() > BOARD_SIZE + 1 {
            return Err(ParseError::RowCount(tokens.len()));
        }

        let mut board = Board::empty(Color::Black);
        for (y, row) in tokens[..BOARD_SIZE].iter().enumerate() {
            let len = row.chars().count();
            if len != BOARD_SIZE {
                return Err(ParseError::RowLength { row: y, len });
            }
            for (x, ch) in row.chars().enumerate() {
                board.cells[y][x] = match ch {
                    '.' | '-' => Cell::Empty,
                    'B' | 'X' => Cell::Black,
                    'W' | 'O' => Cell::White,
                    _ => return Err(ParseError::InvalidCell { row: y, ch }),
                };
            }
        }

        if let Some(side) = tokens.get(BOARD_SIZE) {
            board.current_player = match side.to_ascii_lowercase().as_str() {
                "b" => Color::Black,
                "w" => Color::White,
                _ => return Err(ParseError::InvalidSide(side.to_string())),
            };
        }

        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
