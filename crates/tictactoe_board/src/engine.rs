//! Game engine: board, turn, status.

use super::action::{InvalidMove, Move};
use super::contracts::assert_invariants;
use super::rules::{check_winner, is_full};
use super::{Board, GameStatus, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Shared by local hot-seat play and online play. `Won` and `Draw` are
/// absorbing; only [`Game::reset`] leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose move is legal.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the successful moves so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `mark` at `index` (0-8) and re-evaluates the status.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is out of range, the game is
    /// over, the square is occupied, or it is not `mark`'s turn. The game
    /// is unchanged on error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameStatus, InvalidMove> {
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;

        if self.status.is_terminal() {
            debug!("Rejected move after game end");
            return Err(InvalidMove::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Rejected move on occupied square");
            return Err(InvalidMove::Occupied(position));
        }

        if mark != self.turn {
            debug!(%mark, "Rejected move out of turn");
            return Err(InvalidMove::WrongTurn(mark));
        }

        self.board.set(position, Square::Occupied(mark));
        self.history.push(Move::new(mark, position));

        let status = self.evaluate();
        assert_invariants(self);

        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game finished");
        }
        Ok(status)
    }

    /// Recomputes the status from the board.
    ///
    /// A completed line wins even on a full board; a full board without
    /// one is a draw. While in progress the turn passes to the opponent of
    /// the last mover, so calling this repeatedly is harmless.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> GameStatus {
        self.status = if let Some(winner) = check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            self.turn = self
                .history
                .last()
                .map_or(Mark::X, |last| last.mark.opponent());
            GameStatus::InProgress
        };
        self.status
    }

    /// Rebuilds a game by applying moves in order from a fresh board.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, InvalidMove> {
        let mut game = Self::new();
        for action in moves {
            game.apply_move(action.position.to_index(), action.mark)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
