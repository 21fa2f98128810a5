//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Position};
use super::win::check_winner;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|pos| !board.is_empty(pos))
}

/// A full board with no winner is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
