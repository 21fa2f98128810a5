//! Pure view model of a [`GameState`].
//!
//! [`render`] turns the state into everything a front end needs to draw:
//! the nine cells, the status line and the ordered move links. Front ends
//! forward clicks back as plain `GameState` calls.

use super::{GameState, GameStatus, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// One board cell as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Cell position; clicking it calls `apply_position(position)`.
    pub position: Position,
    /// Cell contents.
    pub square: Square,
    /// Part of the winning line.
    pub winning: bool,
}

/// One entry of the move list; clicking it calls `jump_to(step)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveLink {
    /// History index the link jumps to.
    pub step: usize,
    /// Link text.
    pub label: String,
    /// Whether this is the displayed snapshot (rendered bold).
    pub current: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// Status of the displayed board.
    pub status: GameStatus,
    /// Move links in display order.
    pub moves: Vec<MoveLink>,
    /// Active sort order.
    pub sort_ascending: bool,
}

impl GameView {
    /// The status line text.
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }
}

/// Builds the view of `game`.
#[instrument(skip(game), fields(step = game.step_number()))]
pub fn render(game: &GameState) -> GameView {
    let status = game.status();
    let winning_line = status.winning_line();
    let board = game.board();

    let cells = Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        winning: winning_line.is_some_and(|line| line.contains(position)),
    });

    let mut moves: Vec<MoveLink> = game
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveLink {
            step,
            label: match entry.last_move() {
                Some(last) => format!("Go to move #{} {}", step, last),
                None => "Go to game start".to_string(),
            },
            current: step == game.step_number(),
        })
        .collect();

    if !game.sort_ascending() {
        moves.reverse();
    }

    GameView {
        cells,
        status,
        moves,
        sort_ascending: game.sort_ascending(),
    }
}
