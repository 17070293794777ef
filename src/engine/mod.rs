//! The game engine: a turn-based step/reset state machine.
//!
//! One [`TicTacToe`] instance owns one game. Agents drive it with
//! [`TicTacToe::step`] and query it between moves; a rejected move is an
//! error value and leaves the state untouched, so the caller can retry
//! immediately.
//!
//! ## Lifecycle
//!
//! Construction and [`TicTacToe::reset`] both produce the same initial
//! state: empty board, player one to move, empty history. From there the
//! state changes only through successful steps until a win or draw, after
//! which every step is rejected until the next reset.
//!
//! ## Branching
//!
//! No internal locking exists; the engine is meant for single-threaded
//! use, one instance per game. `Clone` produces a fully independent copy
//! for lookahead - the move history is a persistent vector, so mid-game
//! clones are cheap.

use crate::core::{
    Action, ActionMap, Board, EngineConfig, EngineError, GameInfo, GameState, MoveRecord, Player,
};
use crate::rules::{self, GameResult};

/// Everything a successful step reports back to the acting player.
#[derive(Clone, Debug)]
pub struct Step {
    /// The board from the acting player's perspective.
    pub observation: Board,

    /// Result after the move.
    pub result: GameResult,

    /// Whether the game ended on this move.
    pub terminal: bool,

    /// Fresh info snapshot.
    pub info: GameInfo,
}

/// Generalized tic-tac-toe engine.
///
/// ```
/// use rust_tictactoe::{Action, GameResult, Player, TicTacToe};
///
/// let mut game = TicTacToe::default();
///
/// // Player one takes the top row while player two answers below it.
/// for action in [0, 3, 1, 4] {
///     game.step(Action::new(action)).unwrap();
/// }
/// let step = game.step(Action::new(2)).unwrap();
///
/// assert!(step.terminal);
/// assert_eq!(step.result, GameResult::Win(Player::ONE));
/// assert_eq!(game.result_for(Player::TWO), -1);
/// ```
#[derive(Clone, Debug)]
pub struct TicTacToe {
    config: EngineConfig,
    actions: ActionMap,
    state: GameState,
}

impl Default for TicTacToe {
    /// The classic 3×3 game.
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl TicTacToe {
    /// Create an engine for an n×n grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGridSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Ok(Self::with_config(EngineConfig::new(size)?))
    }

    /// Create an engine from an already-validated config.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            actions: ActionMap::new(config.size()),
            state: GameState::new(config.size()),
        }
    }

    // === Queries ===

    /// Grid size n.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Number of distinct actions (n²).
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.config.action_count()
    }

    /// Player to move, or the last mover once terminal.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.terminal
    }

    /// Result so far.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.state.result
    }

    /// Borrow the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Actions applied so far, in order. An owned copy.
    #[must_use]
    pub fn history(&self) -> Vec<Action> {
        self.state.history.iter().map(|record| record.action).collect()
    }

    /// All currently playable actions, in ascending index order.
    ///
    /// Enumerates empty cells regardless of the terminal flag: after a
    /// line win, unmarked cells remain and still show up here.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.actions
            .actions()
            .filter(|&action| self.is_legal(action))
            .collect()
    }

    /// Whether `action` is in range and targets an empty cell.
    ///
    /// Purely cell-based; [`TicTacToe::step`] additionally rejects every
    /// move once the game is over.
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        match self.actions.get(action) {
            Some((row, col)) => self.state.board.is_empty_at(row, col),
            None => false,
        }
    }

    /// The board as seen by `player`: `+1` cells are always the viewer's
    /// own marks. Returns an owned copy.
    #[must_use]
    pub fn observation(&self, player: Player) -> Board {
        self.state.board.perspective(player)
    }

    /// Signed result for `player`: `+1` win, `-1` loss, `0` draw or in
    /// progress.
    #[must_use]
    pub fn result_for(&self, player: Player) -> i8 {
        self.state.result.signed() * player.sign()
    }

    /// Fresh info snapshot: history copy, player to move, result.
    #[must_use]
    pub fn info(&self) -> GameInfo {
        GameInfo {
            history: self.history(),
            player: self.state.current_player,
            result: self.state.result,
        }
    }

    // === Transitions ===

    /// Reinitialize to the empty board with player one to move.
    ///
    /// `seed` is accepted for interface uniformity with seeded
    /// environments; the rules are deterministic, so it has no effect.
    /// Returns the empty-board observation for player one and a fresh
    /// info record. All prior state is discarded.
    pub fn reset(&mut self, _seed: Option<u64>) -> (Board, GameInfo) {
        self.state = GameState::new(self.config.size());
        (self.observation(Player::ONE), self.info())
    }

    /// Apply one move for the current player.
    ///
    /// On success the cell is marked, the move recorded, termination
    /// evaluated, and - while the game continues - the turn passes to the
    /// opponent. The returned observation is from the acting player's
    /// perspective.
    ///
    /// # Errors
    ///
    /// [`EngineError::IllegalAction`] when the game is already over, the
    /// index is out of range, or the cell is occupied. The board, player,
    /// history, terminal flag and result are all left untouched, and the
    /// engine is safe to call again.
    pub fn step(&mut self, action: Action) -> Result<Step, EngineError> {
        if self.state.terminal {
            return Err(EngineError::IllegalAction(action));
        }
        let (row, col) = self
            .actions
            .get(action)
            .ok_or(EngineError::IllegalAction(action))?;
        if !self.state.board.is_empty_at(row, col) {
            return Err(EngineError::IllegalAction(action));
        }

        let mover = self.state.current_player;
        self.state.board.set(row, col, mover.sign());
        self.state.history.push_back(MoveRecord { player: mover, action });

        self.state.result = rules::evaluate(&self.state.board, self.state.moves_played());
        self.state.terminal = self.state.result.is_terminal();
        if !self.state.terminal {
            self.state.current_player = mover.opponent();
        }

        Ok(Step {
            observation: self.observation(mover),
            result: self.state.result,
            terminal: self.state.terminal,
            info: self.info(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_is_three_by_three() {
        let game = TicTacToe::default();

        assert_eq!(game.size(), 3);
        assert_eq!(game.action_count(), 9);
        assert_eq!(game.current_player(), Player::ONE);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert!(matches!(
            TicTacToe::new(0),
            Err(EngineError::InvalidGridSize(0))
        ));
    }

    #[test]
    fn test_step_alternates_players() {
        let mut game = TicTacToe::default();

        assert_eq!(game.current_player(), Player::ONE);
        game.step(Action::new(4)).unwrap();
        assert_eq!(game.current_player(), Player::TWO);
        game.step(Action::new(0)).unwrap();
        assert_eq!(game.current_player(), Player::ONE);
    }

    #[test]
    fn test_step_marks_for_the_mover() {
        let mut game = TicTacToe::default();

        game.step(Action::new(4)).unwrap();
        game.step(Action::new(0)).unwrap();

        let board = game.observation(Player::ONE);
        assert_eq!(board.get(1, 1), 1);
        assert_eq!(board.get(0, 0), -1);
    }

    #[test]
    fn test_step_observation_is_the_movers() {
        let mut game = TicTacToe::default();

        let first = game.step(Action::new(4)).unwrap();
        assert_eq!(first.observation.get(1, 1), 1);

        // Player two sees its own fresh mark as +1 too.
        let second = game.step(Action::new(0)).unwrap();
        assert_eq!(second.observation.get(0, 0), 1);
        assert_eq!(second.observation.get(1, 1), -1);
    }

    #[test]
    fn test_size_one_game_ends_immediately() {
        let mut game = TicTacToe::new(1).unwrap();

        let step = game.step(Action::new(0)).unwrap();

        assert!(step.terminal);
        assert_eq!(step.result, GameResult::Win(Player::ONE));
        assert!(game.legal_actions().is_empty());
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut game = TicTacToe::default();
        game.step(Action::new(0)).unwrap();
        game.step(Action::new(4)).unwrap();

        let (board, info) = game.reset(Some(7));

        assert_eq!(board, Board::new(3));
        assert!(info.history.is_empty());
        assert_eq!(info.player, Player::ONE);
        assert_eq!(info.result, GameResult::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::ONE);
    }
}
