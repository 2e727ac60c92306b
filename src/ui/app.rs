use crate::game::{GameOutcome, MoveError, Session, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, TurnInfo};

pub struct App {
    session: Session,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;

            if !self.should_quit && self.bot_to_move() {
                self.play_bot_turn()?;
            }
        }
        Ok(())
    }

    fn bot_to_move(&self) -> bool {
        !self.session.state().is_terminal() && !self.session.current_seat().agent.is_human()
    }

    fn play_bot_turn(&mut self) -> io::Result<()> {
        let turn = self
            .session
            .play_turn()
            .map_err(|e| io::Error::other(e.to_string()))?;

        self.message = Some(match turn.outcome {
            Some(outcome) => outcome_message(outcome),
            None => format!("{} played column {}", turn.player.name(), turn.column + 1),
        });
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < COLS {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.session.restart();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human player's counter in the selected column
    fn drop_piece(&mut self) {
        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let seat = self.session.current_seat();
        if !seat.agent.is_human() {
            self.message = Some(format!("Waiting for {}...", seat.symbol.name()));
            return;
        }

        self.message = match self.session.apply_move(self.selected_column) {
            Ok(Some(outcome)) => Some(outcome_message(outcome)),
            Ok(None) => None,
            Err(MoveError::ColumnFull) => Some("Column is full!".to_string()),
            Err(MoveError::InvalidColumn) => Some("Invalid column!".to_string()),
            Err(MoveError::GameOver) => Some("Game is over!".to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let seat = self.session.current_seat();
        let turn = TurnInfo {
            player: seat.symbol,
            agent_name: seat.agent.name(),
        };
        game_view::render(
            frame,
            self.session.state(),
            &turn,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(symbol) => format!("{} wins!", symbol.name()),
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Agent, BotAgent, HumanAgent, RandomAgent};
    use crate::game::{Cell, Symbol};
    use ratatui::backend::TestBackend;

    fn human_vs_bot() -> App {
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(HumanAgent::detached()),
            Box::new(BotAgent::with_fallback(1, RandomAgent::with_seed(0))),
        ];
        App::new(Session::new(4, agents).unwrap())
    }

    #[test]
    fn digit_key_drops_for_human() {
        let mut app = human_vs_bot();
        app.handle_key(KeyEvent::from(KeyCode::Char('2')));

        assert_eq!(app.session.state().board().get(5, 1), Cell::Red);
        assert_eq!(app.selected_column, 1);
        assert!(app.bot_to_move());
    }

    #[test]
    fn bot_turn_reports_its_column() {
        let mut app = human_vs_bot();
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        app.play_bot_turn().unwrap();

        assert_eq!(app.session.state().current_player(), Symbol::Red);
        let message = app.message.clone().unwrap();
        assert!(message.starts_with("Yellow played column"), "{message}");
    }

    #[test]
    fn keys_wait_while_bot_to_move() {
        let mut app = human_vs_bot();
        app.handle_key(KeyEvent::from(KeyCode::Char('4')));
        app.handle_key(KeyEvent::from(KeyCode::Char('4')));

        assert_eq!(app.message.as_deref(), Some("Waiting for Yellow..."));
        assert_eq!(app.session.state().board().get(4, 3), Cell::Empty);
    }

    #[test]
    fn restart_and_quit_keys() {
        let mut app = human_vs_bot();
        app.handle_key(KeyEvent::from(KeyCode::Char('1')));
        app.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert_eq!(app.session.state().board().get(5, 0), Cell::Empty);

        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn renders_into_test_backend() {
        let app = human_vs_bot();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Connect 4"));
        assert!(text.contains("Current Player: Red (Human)"));
    }
}
