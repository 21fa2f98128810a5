//! Keyboard and mouse input mapped to game commands.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

use crate::ui::{Regions, Target};

/// Direction of a board-cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A user intent, dispatched to the game state by [`App`](crate::app::App).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at the position.
    Place(Position),
    /// Place a mark at the board cursor.
    PlaceAtCursor,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Set the move-list order (`true` = ascending).
    Sort(bool),
    /// Jump to a history step.
    Jump(usize),
    /// One step back in history.
    StepBack,
    /// One step forward in history.
    StepForward,
    /// Jump to the empty board.
    JumpStart,
    /// Jump to the newest move.
    JumpLatest,
    /// Leave the game.
    Quit,
}

/// Maps a key press to a command.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Command::Place(Position::from_index(index)?)
        }
        KeyCode::Up => Command::MoveCursor(Direction::Up),
        KeyCode::Down => Command::MoveCursor(Direction::Down),
        KeyCode::Left => Command::MoveCursor(Direction::Left),
        KeyCode::Right => Command::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Command::PlaceAtCursor,
        KeyCode::Char('a') => Command::Sort(true),
        KeyCode::Char('d') => Command::Sort(false),
        KeyCode::Char('[') | KeyCode::PageUp => Command::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Command::StepForward,
        KeyCode::Home => Command::JumpStart,
        KeyCode::End => Command::JumpLatest,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Maps a left click at terminal cell (`column`, `row`) to a command.
pub fn command_for_click(regions: &Regions, column: u16, row: u16) -> Option<Command> {
    let command = match regions.target_at(column, row)? {
        Target::Cell(pos) => Command::Place(pos),
        Target::Sort(ascending) => Command::Sort(ascending),
        Target::Move(step) => Command::Jump(step),
    };
    Some(command)
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            command_for_key(KeyCode::Char('1')),
            Some(Command::Place(Position::TopLeft))
        );
        assert_eq!(
            command_for_key(KeyCode::Char('9')),
            Some(Command::Place(Position::BottomRight))
        );
        assert_eq!(command_for_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_history_and_sort_keys() {
        assert_eq!(command_for_key(KeyCode::Char('[')), Some(Command::StepBack));
        assert_eq!(command_for_key(KeyCode::Char(']')), Some(Command::StepForward));
        assert_eq!(command_for_key(KeyCode::Home), Some(Command::JumpStart));
        assert_eq!(command_for_key(KeyCode::Char('d')), Some(Command::Sort(false)));
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::MiddleLeft, Direction::Down), Position::BottomLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }
}
