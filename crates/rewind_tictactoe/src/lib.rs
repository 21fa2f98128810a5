//! Rewind Tic-Tac-Toe - tic-tac-toe with a rewindable move history
//!
//! The game state is an immutable snapshot log plus a cursor. Moving
//! after rewinding discards the snapshots past the cursor and starts a
//! new branch.
//!
//! # Architecture
//!
//! - **Types**: `Player`, `Square`, `Board`, `Position`
//! - **Rules**: pure win and draw checks over one board
//! - **History**: append-only snapshot log with branch truncation
//! - **Game**: `GameState`, the only mutable surface
//! - **View**: pure `render` from `GameState` to a drawable `GameView`
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! // Rewind two moves and branch.
//! game.jump_to(3).unwrap();
//! game.apply_move(8).unwrap();
//! assert_eq!(game.history().len(), 5);
//! assert!(matches!(game.status(), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod position;
pub mod rules;
mod types;
pub mod view;

pub use error::{MoveError, SnapshotError};
pub use game::{GameState, GameStatus};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{Line, check_winner, winning_line};
pub use types::{Board, LastMove, Player, Square};
pub use view::{CellView, GameView, MoveLink, render};
