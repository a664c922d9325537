//! Game state machine: phases, turn protocol and end-of-game handling

use classical_engine::ClassicalEngine;
use othello_core::{Board, Color, Engine, GameResult, Move, TurnStatus};

use crate::player::{PlayerRole, Players};

/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    ModeSelection,
    Gameplay,
}

/// What a single turn request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Not in gameplay, or the game is already over
    Inactive,
    /// A human is to move and no target cell was supplied
    Waiting,
    /// The target cell was not a legal move and was ignored
    Rejected,
    /// A disc was placed
    Played(Move),
    /// The computer found no legal move
    NoMove,
}

/// Represents the full lifecycle of one Othello session
#[derive(Debug, Clone)]
pub struct Game {
    /// Live position
    board: Board,
    /// Final result, `None` until the game ends
    result: GameResult,
    /// Set once neither side can move
    game_over: bool,
    /// White is computer-controlled
    vs_computer: bool,
    /// Current screen
    phase: GamePhase,
    /// Role per color; absent outside gameplay
    players: Option<Players>,
    /// Search used for computer turns
    engine: ClassicalEngine,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh session sitting on the main menu.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            result: GameResult::None,
            game_over: false,
            vs_computer: false,
            phase: GamePhase::Menu,
            players: None,
            engine: ClassicalEngine::new(),
        }
    }

    /// Session already in gameplay from an arbitrary position.
    pub fn with_board(board: Board, vs_computer: bool) -> Self {
        let mut game = Self::new();
        game.select_mode(vs_computer);
        game.board = board;
        game
    }

    // -------------------------------------------------------------------------
    // Phase transitions
    // -------------------------------------------------------------------------

    /// Menu -> mode selection ("Play").
    pub fn open_mode_selection(&mut self) {
        if self.phase == GamePhase::Menu {
            self.phase = GamePhase::ModeSelection;
        }
    }

    /// Mode selection -> menu ("Back").
    pub fn back_to_menu(&mut self) {
        if self.phase == GamePhase::ModeSelection {
            self.phase = GamePhase::Menu;
        }
    }

    /// Assigns the player roles and starts a fresh game.
    pub fn select_mode(&mut self, vs_computer: bool) {
        self.board = Board::new();
        self.result = GameResult::None;
        self.game_over = false;
        self.vs_computer = vs_computer;
        self.players = Some(Players::for_mode(vs_computer));
        self.engine.new_game();
        self.phase = GamePhase::Gameplay;

        tracing::debug!(vs_computer, "game started");
    }

    /// Drops the current game and returns to the main menu.
    pub fn reset_to_menu(&mut self) {
        self.board = Board::new();
        self.result = GameResult::None;
        self.game_over = false;
        self.players = None;
        self.engine.new_game();
        self.phase = GamePhase::Menu;
    }

    // -------------------------------------------------------------------------
    // Turn protocol
    // -------------------------------------------------------------------------

    /// Runs one turn for the side to move, then the mobility check.
    ///
    /// A human turn uses `target` when it is a legal move and silently
    /// ignores it otherwise. A computer turn ignores `target` and searches.
    pub fn handle_turn(&mut self, target: Option<(usize, usize)>) -> TurnOutcome {
        if self.phase != GamePhase::Gameplay || self.game_over {
            return TurnOutcome::Inactive;
        }
        let Some(players) = self.players else {
            return TurnOutcome::Inactive;
        };

        let outcome = match players.role(self.board.current_player()) {
            PlayerRole::Human => self.play_human(target),
            PlayerRole::Computer => self.play_computer(),
        };

        self.check_game_over();
        outcome
    }

    /// Human move at `(x, y)`. Rejected when a computer is to move.
    pub fn human_move(&mut self, x: usize, y: usize) -> TurnOutcome {
        match self.active_role() {
            None => TurnOutcome::Inactive,
            Some(PlayerRole::Computer) => TurnOutcome::Rejected,
            Some(PlayerRole::Human) => self.handle_turn(Some((x, y))),
        }
    }

    /// Computer move. Waits when a human is to move.
    pub fn computer_move(&mut self) -> TurnOutcome {
        match self.active_role() {
            None => TurnOutcome::Inactive,
            Some(PlayerRole::Human) => TurnOutcome::Waiting,
            Some(PlayerRole::Computer) => self.handle_turn(None),
        }
    }

    fn play_human(&mut self, target: Option<(usize, usize)>) -> TurnOutcome {
        let Some((x, y)) = target else {
            return TurnOutcome::Waiting;
        };
        if !self.board.is_legal_move(x, y) {
            return TurnOutcome::Rejected;
        }
        let side = self.board.current_player();
        self.board.place_piece(x, y);

        let mv = Move::new(x as u8, y as u8);
        tracing::debug!(side = side.name(), %mv, "human move");
        TurnOutcome::Played(mv)
    }

    fn play_computer(&mut self) -> TurnOutcome {
        let side = self.board.current_player();
        let result = self.engine.search(&self.board);

        match result.best_move {
            Some(mv) => {
                let (x, y) = mv.coords();
                self.board.place_piece(x, y);
                tracing::debug!(
                    side = side.name(),
                    %mv,
                    score = result.score,
                    nodes = result.nodes,
                    "computer move"
                );
                TurnOutcome::Played(mv)
            }
            None => {
                tracing::info!(side = side.name(), "computer has no legal move and passes");
                TurnOutcome::NoMove
            }
        }
    }

    /// Ends the game when neither side can move, or skips a side that is
    /// stuck while its opponent is not.
    pub fn check_game_over(&mut self) -> TurnStatus {
        if self.game_over {
            return TurnStatus::GameOver(self.result);
        }

        let status = self.board.turn_status();
        match status {
            TurnStatus::GameOver(result) => {
                self.game_over = true;
                self.result = result;
                let (black, white) = self.board.disc_counts();
                tracing::info!(?result, black, white, "game over");
            }
            TurnStatus::Pass => {
                tracing::info!(
                    side = self.board.current_player().name(),
                    "no legal move, turn skipped"
                );
                self.board.pass_turn();
            }
            TurnStatus::Continue => {}
        }
        status
    }

    // -------------------------------------------------------------------------
    // Polling
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_vs_computer(&self) -> bool {
        self.vs_computer
    }

    pub fn players(&self) -> Option<Players> {
        self.players
    }

    pub fn current_player(&self) -> Color {
        self.board.current_player()
    }

    /// `(black, white)` disc counts.
    pub fn disc_counts(&self) -> (u32, u32) {
        self.board.disc_counts()
    }

    /// Role of the side to move, while a game is being played.
    pub fn active_role(&self) -> Option<PlayerRole> {
        if self.phase != GamePhase::Gameplay || self.game_over {
            return None;
        }
        self.players
            .map(|players| players.role(self.board.current_player()))
    }

    /// Whose-turn banner, absent once the game is over.
    pub fn turn_label(&self) -> Option<&'static str> {
        if self.phase != GamePhase::Gameplay || self.game_over {
            return None;
        }
        let label = match (self.vs_computer, self.board.current_player()) {
            (true, Color::Black) => "Your Turn",
            (true, Color::White) => "Computer's Turn",
            (false, Color::Black) => "Player 1's Turn",
            (false, Color::White) => "Player 2's Turn",
        };
        Some(label)
    }

    /// End-of-game banner.
    pub fn result_message(&self) -> Option<&'static str> {
        if !self.game_over {
            return None;
        }
        let message = match (self.result, self.vs_computer) {
            (GameResult::BlackWins, true) => "You Won!",
            (GameResult::BlackWins, false) => "Player 1 Won!",
            (GameResult::WhiteWins, true) => "Computer Won!",
            (GameResult::WhiteWins, false) => "Player 2 Won!",
            (GameResult::Draw, _) | (GameResult::None, _) => "It's a Draw!",
        };
        Some(message)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
