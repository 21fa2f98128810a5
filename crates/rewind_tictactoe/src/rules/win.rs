//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

impl Line {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Winning lines, scanned in this order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the winner and the first completed line, if any.
///
/// Ties (two completed lines) resolve to the earliest line in [`LINES`].
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board).map(|(_, l)| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(winning_line(&board).map(|(_, l)| l.indices()), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_tie() {
        // X X X / . . . / X X X is unreachable in play but exercises scan order.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(winning_line(&board), Some((Player::X, LINES[0])));
    }

    /// Exhaustive check over all 3^9 boards: a winner is reported exactly
    /// when some line holds three equal marks.
    #[test]
    fn test_winner_iff_uniform_line() {
        for code in 0..3usize.pow(9) {
            let mut board = Board::new();
            let mut rest = code;
            for pos in Position::ALL {
                let square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                board.set(pos, square);
                rest /= 3;
            }

            let uniform = LINES.iter().any(|line| {
                let [a, b, c] = line.positions();
                board.get(a) != Square::Empty
                    && board.get(a) == board.get(b)
                    && board.get(b) == board.get(c)
            });
            assert_eq!(check_winner(&board).is_some(), uniform, "{}", board.display());
        }
    }
}
