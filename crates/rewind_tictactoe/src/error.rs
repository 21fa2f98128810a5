//! Errors for rejected game transitions.

use super::Position;

/// Error returned when a move or history jump is rejected.
///
/// A rejected transition never changes the game state; callers that
/// follow the "ignore illegal moves" rule can drop the error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The history step does not exist.
    #[display("Step {} out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error returned when a serialized game does not describe a reachable state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The history has no entries.
    #[display("History has no entries")]
    EmptyHistory,

    /// Entry 0 is not the empty starting board.
    #[display("History does not start from an empty board")]
    BadInitialEntry,

    /// Entry `step` is not one legal move after entry `step - 1`.
    #[display("History entry {} is not a legal move from the previous board", _0)]
    BrokenHistory(usize),

    /// The cursor points past the last entry.
    #[display("Step {} out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Stored step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },

    /// The turn flag disagrees with the cursor parity.
    #[display("Turn flag does not match step {}", _0)]
    TurnMismatch(usize),
}

impl std::error::Error for SnapshotError {}
