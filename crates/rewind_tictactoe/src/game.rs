//! Game state with a rewindable move history.
//!
//! `GameState` is a snapshot log plus a cursor. The only ways to change
//! it are [`GameState::apply_move`], [`GameState::jump_to`] and
//! [`GameState::set_sort_order`]; a rejected transition leaves it intact.

use super::history::{History, HistoryEntry};
use super::rules::{Line, is_full};
use super::{Board, MoveError, Player, Position, SnapshotError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of the board at the history cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Nobody has won and there are empty squares.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player, Line),
    /// Every square is filled and nobody won.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player, _) => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won(_, line) => Some(*line),
            _ => None,
        }
    }

    /// True once the displayed board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Complete game state for one session.
///
/// Deserializing checks the cursor against the history and the turn flag
/// against the cursor, so a loaded state upholds the same invariants as
/// one built by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    /// Every snapshot of the current branch.
    history: History,
    /// Index of the displayed snapshot.
    step_number: usize,
    /// Whether X moves next.
    x_is_next: bool,
    /// Display order of the move list.
    sort_ascending: bool,
}

impl GameState {
    /// Creates a new game: one empty snapshot, X to move, ascending list.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
            sort_ascending: true,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns whether the move list is shown oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Returns the player whose turn it is.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &HistoryEntry {
        &self.history.entries()[self.step_number]
    }

    /// Returns the displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Status of the displayed board.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn status(&self) -> GameStatus {
        if let Some((player, line)) = *self.current().winner() {
            GameStatus::Won(player, line)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Marks cell `index` (0-8) for the player to move.
    ///
    /// Any snapshots after the cursor are discarded before the new one is
    /// appended, so moving after a rewind starts a new branch.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the state unchanged, if the index is off
    /// the board, the displayed board already has a winner, or the cell
    /// is occupied.
    #[instrument(skip(self), fields(step = self.step_number, player = ?self.next_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_position(pos)
    }

    /// Marks `pos` for the player to move. See [`GameState::apply_move`].
    #[instrument(skip(self), fields(step = self.step_number, player = ?self.next_player()))]
    pub fn apply_position(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = self.current();
        if current.winner().is_some() {
            debug!("Rejected move: game already won");
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(pos) {
            debug!("Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let entry = HistoryEntry::after_move(current.board(), pos, self.next_player());
        self.history.truncate_after(self.step_number);
        self.history.push(entry);
        self.step_number = self.history.last_step();
        self.x_is_next = !self.x_is_next;

        debug!(new_step = self.step_number, "Move applied");
        Ok(())
    }

    /// Moves the cursor to `step`; X is next on even steps.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if `step` has no snapshot.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        debug!("Jumped to step");
        Ok(())
    }

    /// Moves the cursor one snapshot back, stopping at the start.
    #[instrument(skip(self))]
    pub fn step_back(&mut self) {
        let step = self.step_number.saturating_sub(1);
        self.jump_to_clamped(step);
    }

    /// Moves the cursor one snapshot forward, stopping at the newest.
    #[instrument(skip(self))]
    pub fn step_forward(&mut self) {
        let step = (self.step_number + 1).min(self.history.last_step());
        self.jump_to_clamped(step);
    }

    /// Sets the move-list order; history and cursor are untouched.
    #[instrument(skip(self))]
    pub fn set_sort_order(&mut self, ascending: bool) {
        self.sort_ascending = ascending;
    }

    fn jump_to_clamped(&mut self, step: usize) {
        self.step_number = step.min(self.history.last_step());
        self.x_is_next = self.step_number % 2 == 0;
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRecord {
    history: History,
    step_number: usize,
    x_is_next: bool,
    sort_ascending: bool,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = SnapshotError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let len = record.history.len();
        if record.step_number >= len {
            return Err(SnapshotError::StepOutOfRange {
                step: record.step_number,
                len,
            });
        }
        if record.x_is_next != (record.step_number % 2 == 0) {
            return Err(SnapshotError::TurnMismatch(record.step_number));
        }
        Ok(Self {
            history: record.history,
            step_number: record.step_number,
            x_is_next: record.x_is_next,
            sort_ascending: record.sort_ascending,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
