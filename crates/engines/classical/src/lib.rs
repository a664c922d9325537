//! Classical Othello Engine
//!
//! Depth-limited minimax with alpha-beta pruning over a positional
//! square-weight evaluation. This is the engine behind the computer player.

mod eval;
mod search;

use othello_core::{Board, Engine, SearchResult};

/// Classical Othello engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search, fixed depth of [`SEARCH_DEPTH`] plies below each candidate
/// - Alpha-beta pruning
/// - Corner/edge square-weight evaluation
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let result = search::choose_move(board, &mut self.nodes);

        tracing::debug!(
            side = board.current_player().name(),
            best_move = ?result.map(|(mv, _)| mv.to_string()),
            score = result.map(|(_, s)| s).unwrap_or(0),
            nodes = self.nodes,
            "classical search finished"
        );

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth: SEARCH_DEPTH,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, WEIGHTS};
pub use search::{choose_move, minimax, SEARCH_DEPTH};
