pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ParseError;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-selection strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the side to move must pass)
    pub best_move: Option<Move>,
    /// Score of the chosen move; engines may use their own scale and sign
    pub score: i32,
    /// Search depth in plies below the candidate move
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all Othello engines must implement.
///
/// Engines only ever propose legal moves for `board.current_player()`, or
/// no move at all when that side has to pass.
pub trait Engine: Send {
    /// Chooses a move for the side to move. Runs to completion on the
    /// calling thread.
    fn search(&mut self, board: &Board) -> SearchResult;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "othello-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
