//! Match runner for playing games between engines

use othello_core::{Board, Color, Engine, GameResult, TurnStatus};
use serde::{Deserialize, Serialize};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Disc placements per game before adjudicating on disc count
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log every finished game at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 120,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Result of a single game for one participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    fn for_color(result: GameResult, color: Color) -> Self {
        match result.winner() {
            Some(winner) if winner == color => GameOutcome::Win,
            Some(_) => GameOutcome::Loss,
            None => GameOutcome::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of points scored, a draw counting half. 0.0 before any game.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Discs placed, passes excluded
    pub moves: u32,
    /// Side that lost by proposing an illegal move, if any
    pub forfeited_by: Option<Color>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective. engine1 takes Black
    /// in the first game.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_color = if self.config.alternate_colors && game_num % 2 == 1 {
                Color::White
            } else {
                Color::Black
            };

            let record = match engine1_color {
                Color::Black => self.play_game(engine1, engine2),
                Color::White => self.play_game(engine2, engine1),
            };
            let outcome = GameOutcome::for_color(record.result, engine1_color);
            result.record(outcome);

            if self.config.verbose {
                tracing::info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1_color = engine1_color.name(),
                    ?outcome,
                    black = record.black_discs,
                    white = record.white_discs,
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }
        }

        result
    }

    /// Play a single game from the standard opening
    pub fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameRecord {
        self.play_from(Board::new(), black, white)
    }

    /// Play a single game from an arbitrary position
    pub fn play_from(
        &self,
        mut board: Board,
        black: &mut dyn Engine,
        white: &mut dyn Engine,
    ) -> GameRecord {
        black.new_game();
        white.new_game();
        let mut moves = 0;

        while moves < self.config.max_moves {
            match board.turn_status() {
                TurnStatus::GameOver(result) => return finished(&board, result, moves, None),
                TurnStatus::Pass => {
                    tracing::debug!(side = board.current_player().name(), "pass");
                    board.pass_turn();
                    continue;
                }
                TurnStatus::Continue => {}
            }

            let side = board.current_player();
            let engine: &mut dyn Engine = match side {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };
            let search = engine.search(&board);

            let Some(mv) = search.best_move else {
                // The side has a legal move, so a pass here is an illegal move
                tracing::warn!(
                    engine = engine.name(),
                    side = side.name(),
                    "engine passed with legal moves available"
                );
                return forfeit(&board, side, moves);
            };
            let (x, y) = mv.coords();
            if !board.place_piece(x, y) {
                tracing::warn!(engine = engine.name(), side = side.name(), %mv, "illegal move");
                return forfeit(&board, side, moves);
            }
            moves += 1;
            tracing::debug!(
                side = side.name(),
                %mv,
                score = search.score,
                nodes = search.nodes,
                "move"
            );
        }

        // Move cap reached: adjudicate on the discs on the board
        let (black_discs, white_discs) = board.disc_counts();
        finished(
            &board,
            GameResult::from_counts(black_discs, white_discs),
            moves,
            None,
        )
    }
}

fn finished(board: &Board, result: GameResult, moves: u32, forfeited_by: Option<Color>) -> GameRecord {
    let (black_discs, white_discs) = board.disc_counts();
    GameRecord {
        result,
        black_discs,
        white_discs,
        moves,
        forfeited_by,
    }
}

fn forfeit(board: &Board, side: Color, moves: u32) -> GameRecord {
    let result = match side {
        Color::Black => GameResult::WhiteWins,
        Color::White => GameResult::BlackWins,
    };
    finished(board, result, moves, Some(side))
}

/// Quick utility to run a single match
pub fn quick_match(engine1: &mut dyn Engine, engine2: &mut dyn Engine, num_games: u32) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
