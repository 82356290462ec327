//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 winning triples: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark holding it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((mark, [a, b, c]))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
