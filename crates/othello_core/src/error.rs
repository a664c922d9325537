/// Errors produced while parsing the board text format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("invalid cell character {ch:?} in row {row}")]
    InvalidCell { row: usize, ch: char },

    #[error("invalid side to move: {0:?}")]
    InvalidSide(String),
}
