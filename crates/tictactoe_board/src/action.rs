//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the mover's intent
//! and can be validated independently of execution.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reasons a move is rejected. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It is the other mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),
}

impl std::error::Error for InvalidMove {}
