//! Application state and event dispatch.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use rewind_tictactoe::{GameState, GameView, Position, render};
use tracing::{debug, info, instrument};

use crate::input::{Command, command_for_click, command_for_key, move_cursor};
use crate::ui::{self, Regions};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    regions: Regions,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given initial move-list order.
    #[instrument]
    pub fn new(sort_ascending: bool) -> Self {
        let mut game = GameState::new();
        game.set_sort_order(sort_ascending);
        Self {
            game,
            cursor: Position::Center,
            regions: Regions::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the current view.
    pub fn view(&self) -> GameView {
        render(&self.game)
    }

    /// Lays out and draws one frame, remembering the layout for clicks.
    pub fn draw(&mut self, frame: &mut Frame) {
        let view = self.view();
        self.regions = Regions::compute(frame.area(), &view);
        ui::draw(frame, &view, self.cursor, &self.regions);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(command) = command_for_key(key) {
            self.dispatch(command);
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(command) = command_for_click(&self.regions, mouse.column, mouse.row) {
            self.dispatch(command);
        }
    }

    /// Applies a command to the game state.
    ///
    /// Illegal moves are ignored; the state stays as it was.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Place(pos) => self.place(pos),
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::Sort(ascending) => self.game.set_sort_order(ascending),
            Command::Jump(step) => self.jump(step),
            Command::StepBack => self.game.step_back(),
            Command::StepForward => self.game.step_forward(),
            Command::JumpStart => self.jump(0),
            Command::JumpLatest => self.jump(self.game.history().last_step()),
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        self.cursor = pos;
        match self.game.apply_position(pos) {
            Ok(()) => debug!(position = %pos, status = %self.game.status(), "Move applied"),
            Err(e) => debug!(position = %pos, error = %e, "Ignoring illegal move"),
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            debug!(error = %e, "Ignoring jump");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_tictactoe::{GameStatus, Player};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    #[test]
    fn test_keys_play_a_game() {
        let mut app = App::new(true);
        for key in ['1', '5', '2', '6', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.game().status().winner(), Some(Player::X));

        // Further moves are ignored.
        let before = app.game().clone();
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_cursor_place() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_history_navigation() {
        let mut app = App::new(true);
        for key in ['5', '1', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Home);
        assert_eq!(app.game().step_number(), 0);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().step_number(), 1);
        app.handle_key(KeyCode::End);
        assert_eq!(app.game().step_number(), 3);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().step_number(), 2);
        assert_eq!(app.game().status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_clicks_place_sort_and_jump() {
        let mut app = App::new(true);
        draw(&mut app);

        let cell = app.regions.cell(Position::Center);
        app.handle_mouse(click(cell.x, cell.y));
        assert_eq!(app.game().step_number(), 1);

        draw(&mut app);
        let button = app.regions.sort_button(false);
        app.handle_mouse(click(button.x + 1, button.y + 1));
        assert!(!app.game().sort_ascending());

        draw(&mut app);
        // Descending: the last row is the game start.
        let (row, step) = *app.regions.move_rows().last().unwrap();
        assert_eq!(step, 0);
        app.handle_mouse(click(row.x, row.y));
        assert_eq!(app.game().step_number(), 0);
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_right_click_ignored() {
        let mut app = App::new(true);
        draw(&mut app);
        let cell = app.regions.cell(Position::Center);
        let mut event = click(cell.x, cell.y);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(event);
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        assert!(!app.game().sort_ascending());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
