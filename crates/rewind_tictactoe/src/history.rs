//! Snapshot log of every board reached in the current branch.

use super::rules::{Line, winning_line};
use super::{Board, LastMove, Player, Position, SnapshotError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One immutable snapshot in the history.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell filled by the move, `None` for the initial entry.
    last_move: Option<LastMove>,
    /// Winner and line of `board`, cached when the entry is created.
    winner: Option<(Player, Line)>,
}

impl HistoryEntry {
    /// The entry at index 0: an empty board with no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            winner: None,
        }
    }

    /// Creates the entry produced by `player` marking `pos` on `previous`.
    #[instrument(skip(previous))]
    pub fn after_move(previous: &Board, pos: Position, player: Player) -> Self {
        let board = previous.with_mark(pos, player);
        let winner = winning_line(&board);
        Self {
            board,
            last_move: Some(pos.into()),
            winner,
        }
    }
}

/// Ordered, never-empty log of snapshots; index 0 is the empty board.
///
/// Entry `k` differs from entry `k - 1` by exactly one newly filled cell.
/// Entries are only ever appended or cut off the end, never edited.
/// Deserialized histories are replayed and rejected unless every entry
/// is the legal successor of the one before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRecord {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<HistoryRecord> for History {
    type Error = SnapshotError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let entries = record.entries;
        match entries.first() {
            None => return Err(SnapshotError::EmptyHistory),
            Some(first) if *first != HistoryEntry::initial() => {
                return Err(SnapshotError::BadInitialEntry);
            }
            Some(_) => {}
        }

        for (step, pair) in entries.windows(2).enumerate().map(|(i, p)| (i + 1, p)) {
            let (previous, entry) = (&pair[0], &pair[1]);
            let pos = entry
                .last_move
                .and_then(|last| Position::from_row_col(last.row, last.col))
                .ok_or(SnapshotError::BrokenHistory(step))?;
            let player = if step % 2 == 1 { Player::X } else { Player::O };
            let legal = previous.winner.is_none() && previous.board.is_empty(pos);
            if !legal || *entry != HistoryEntry::after_move(&previous.board, pos, player) {
                return Err(SnapshotError::BrokenHistory(step));
            }
        }

        Ok(Self { entries })
    }
}

impl History {
    /// Creates a history holding only the initial empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Discards every entry after `step`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_after(&mut self, step: usize) {
        let keep = step + 1;
        if keep < self.entries.len() {
            debug!(dropped = self.entries.len() - keep, "Discarding future entries");
            self.entries.truncate(keep);
        }
    }

    /// Appends a new entry.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
