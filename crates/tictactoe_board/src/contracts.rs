//! Board invariants checked after every successful move.

use super::{Board, Game, Mark};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// Invariant: mark counts differ by at most one, and X never trails O.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the invariant on a board.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let [x_count, o_count] = counts(board);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: history length matches filled squares.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks the invariant on a game.
    #[instrument(skip(game))]
    pub fn holds(game: &Game) -> bool {
        let filled = game.board().occupied_count();
        let history_len = game.history().len();

        let valid = filled == history_len;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

fn counts(board: &Board) -> [usize; 2] {
    let mut out = [0; 2];
    for (slot, mark) in out.iter_mut().zip(Mark::iter()) {
        *slot = board.count(mark);
    }
    out
}

/// Asserts that all game invariants hold (debug builds only).
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        BoardConsistent::holds(game.board()),
        "Board consistency violated"
    );
    debug_assert!(HistoryComplete::holds(game), "History completeness violated");
}
