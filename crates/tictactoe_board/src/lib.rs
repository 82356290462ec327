//! Pure tic-tac-toe board engine.
//!
//! Board representation, strict turn alternation, and win/draw detection.
//! No I/O: both the hot-seat and the online client drive the same
//! [`Game`].
//!
//! ```
//! use tictactoe_board::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
//!     game.apply_move(index, mark).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use engine::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Mark, Square};
