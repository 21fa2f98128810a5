//! Stateless rendering of a [`GameView`] plus the click map that goes with it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{CellView, GameView, Player, Position, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 14;

const HELP: &str = "1-9 / arrows+Enter: place  [ ]: back/forward  Home/End: start/latest  a/d: sort  q: quit";

/// Something a mouse click can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// A sort button (`true` = ascending).
    Sort(bool),
    /// A move link, by history step.
    Move(usize),
}

/// Screen areas of one frame, used for drawing and for hit-testing clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    title: Rect,
    board: Rect,
    cells: [Rect; 9],
    status: Rect,
    sort_ascending: Rect,
    sort_descending: Rect,
    moves: Rect,
    move_rows: Vec<(Rect, usize)>,
    help: Rect,
}

impl Regions {
    /// Lays out `area` for `view`.
    pub fn compute(area: Rect, view: &GameView) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                // Title
                Constraint::Min(BOARD_HEIGHT),        // Body
                Constraint::Length(1),                // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(BUTTON_WIDTH * 2 + 1)])
            .split(outer[1]);

        let board = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
        });

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Sort buttons
                Constraint::Min(3),    // Moves
            ])
            .split(body[1]);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(1),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(info[1]);

        let moves = info[2];
        let inner = moves_block().inner(moves);
        let move_rows = view
            .moves
            .iter()
            .take(inner.height as usize)
            .enumerate()
            .map(|(i, link)| (Rect::new(inner.x, inner.y + i as u16, inner.width, 1), link.step))
            .collect();

        Self {
            title: outer[0],
            board,
            cells,
            status: info[0],
            sort_ascending: buttons[0],
            sort_descending: buttons[2],
            moves,
            move_rows,
            help: outer[2],
        }
    }

    /// Area of a board cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Area of a sort button.
    pub fn sort_button(&self, ascending: bool) -> Rect {
        if ascending { self.sort_ascending } else { self.sort_descending }
    }

    /// Row areas of the visible move links, with the step each jumps to.
    pub fn move_rows(&self) -> &[(Rect, usize)] {
        &self.move_rows
    }

    /// What lies under terminal cell (`column`, `row`).
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let hit = |rect: Rect| rect.contains((column, row).into());

        if let Some(pos) = Position::ALL.into_iter().find(|pos| hit(self.cell(*pos))) {
            return Some(Target::Cell(pos));
        }
        if hit(self.sort_ascending) {
            return Some(Target::Sort(true));
        }
        if hit(self.sort_descending) {
            return Some(Target::Sort(false));
        }
        self.move_rows
            .iter()
            .find(|(rect, _)| hit(*rect))
            .map(|(_, step)| Target::Move(*step))
    }
}

/// Draws one frame.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position, regions: &Regions) {
    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_board(frame, view, cursor, regions);

    let status_style = match view.status.winner() {
        Some(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status_line())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    draw_sort_button(frame, regions.sort_button(true), "Ascending", view.sort_ascending);
    draw_sort_button(frame, regions.sort_button(false), "Descending", !view.sort_ascending);

    draw_moves(frame, view, regions);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, regions.help);
}

fn draw_board(frame: &mut Frame, view: &GameView, cursor: Position, regions: &Regions) {
    let separator_style = Style::default().fg(Color::DarkGray);
    let horizontal = vec!["─".repeat(CELL_WIDTH as usize); 3].join("┼");

    for row in 1..3u16 {
        let y = regions.board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(regions.board.x, y, BOARD_WIDTH, 1).intersection(regions.board);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(separator_style), area);
    }

    for cell in &view.cells {
        draw_cell(frame, regions.cell(cell.position), cell, cell.position == cursor);
        if cell.position.col() < 2 {
            let area = regions.cell(cell.position);
            let sep = Rect::new(area.right(), area.y, 1, area.height).intersection(regions.board);
            let lines = vec![Line::from("│"); area.height as usize];
            frame.render_widget(Paragraph::new(lines).style(separator_style), sep);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut background = Style::default();
    if cell.winning {
        background = background.bg(Color::Green);
        style = style.bg(Color::Green);
    }
    if under_cursor {
        background = background.add_modifier(Modifier::REVERSED);
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_sort_button(frame: &mut Frame, area: Rect, label: &str, active: bool) {
    let style = if active {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_moves(frame: &mut Frame, view: &GameView, regions: &Regions) {
    frame.render_widget(moves_block(), regions.moves);

    for ((area, _), link) in regions.move_rows().iter().zip(&view.moves) {
        let style = if link.current {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = format!("{:>2}. {}", link.step + 1, link.label);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), *area);
    }
}

fn moves_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title("Moves")
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_tictactoe::{GameState, render};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn centre(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_cells_are_disjoint_and_hit() {
        let view = render(&GameState::new());
        let regions = Regions::compute(Rect::new(0, 0, 90, 24), &view);

        for pos in Position::ALL {
            let rect = regions.cell(pos);
            assert_eq!((rect.width, rect.height), (CELL_WIDTH, CELL_HEIGHT));
            let (x, y) = centre(rect);
            assert_eq!(regions.target_at(x, y), Some(Target::Cell(pos)));
        }
        // The separator between the first two cells is not a target.
        let first = regions.cell(Position::TopLeft);
        assert_eq!(regions.target_at(first.right(), first.y), None);
    }

    #[test]
    fn test_hit_edges_are_half_open() {
        let view = render(&GameState::new());
        let regions = Regions::compute(Rect::new(0, 0, 90, 24), &view);
        let cell = regions.cell(Position::Center);

        assert_eq!(regions.target_at(cell.x, cell.y), Some(Target::Cell(Position::Center)));
        let (right, bottom) = (cell.right() - 1, cell.bottom() - 1);
        assert_eq!(regions.target_at(right, bottom), Some(Target::Cell(Position::Center)));
        assert_eq!(regions.target_at(cell.x, cell.bottom()), None);
        assert_eq!(regions.target_at(cell.x - 1, cell.y), None);
    }

    #[test]
    fn test_buttons_and_links_hit() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(0).unwrap();
        game.set_sort_order(false);
        let view = render(&game);
        let regions = Regions::compute(Rect::new(0, 0, 90, 24), &view);

        let (x, y) = centre(regions.sort_button(true));
        assert_eq!(regions.target_at(x, y), Some(Target::Sort(true)));
        let (x, y) = centre(regions.sort_button(false));
        assert_eq!(regions.target_at(x, y), Some(Target::Sort(false)));

        let steps: Vec<_> = regions.move_rows().iter().map(|(_, step)| *step).collect();
        assert_eq!(steps, [2, 1, 0]);
        let (rect, _) = regions.move_rows()[2];
        assert_eq!(regions.target_at(rect.x, rect.y), Some(Target::Move(0)));
    }

    #[test]
    fn test_draw_shows_status_and_links() {
        let mut game = GameState::new();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index).unwrap();
        }
        let view = render(&game);
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        let regions = Regions::compute(Rect::new(0, 0, 90, 24), &view);

        terminal
            .draw(|frame| draw(frame, &view, Position::Center, &regions))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Rewind Tic-Tac-Toe"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Go to move #5 (0, 2)"));
        assert!(text.contains("Ascending"));
        assert!(text.contains("Descending"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let view = render(&GameState::new());
        let regions = Regions::compute(Rect::new(0, 0, 10, 4), &view);
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|frame| draw(frame, &view, Position::TopLeft, &regions))
            .unwrap();
    }
}
