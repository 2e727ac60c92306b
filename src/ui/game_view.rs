use crate::game::{Board, Cell, GameOutcome, GameState, Symbol, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the header needs to know about the seat to move.
pub struct TurnInfo<'a> {
    pub player: Symbol,
    pub agent_name: &'a str,
}

const SELECTED: Color = Color::Cyan;

pub fn render(
    frame: &mut Frame,
    state: &GameState,
    turn: &TurnInfo,
    selected_column: usize,
    message: Option<&str>,
) {
    let [header, board, status, controls] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            // column labels, frame, grid, frame, selector
            Constraint::Min(ROWS as u16 + 4),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(frame.area());

    render_header(frame, state, turn, header);
    render_board(frame, state.board(), selected_column, board);
    render_status(frame, message, status);
    render_controls(frame, controls);
}

fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Red => Color::Red,
        Symbol::Yellow => Color::Yellow,
        Symbol::Blue => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, state: &GameState, turn: &TurnInfo, area: Rect) {
    let players = state.turn_order().len();
    let (text, color) = match state.outcome() {
        Some(GameOutcome::Winner(symbol)) => (
            format!("{} wins  |  {players} players", symbol.name()),
            symbol_color(symbol),
        ),
        Some(GameOutcome::Draw) => (format!("Draw  |  {players} players"), Color::White),
        None => (
            format!(
                "Current Player: {} ({})  |  {players} players",
                turn.player.name(),
                turn.agent_name
            ),
            symbol_color(turn.player),
        ),
    };

    let title = format!("Connect {}", state.board().run_length());
    let widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(widget, area);
}

/// One three-character slot per column, the selected one styled.
fn selector_line(selected: usize, slot: impl Fn(usize) -> String) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    spans.extend((0..COLS).map(|col| {
        if col == selected {
            Span::styled(
                slot(col),
                Style::default()
                    .fg(SELECTED)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::raw(slot(col))
        }
    }));
    spans.push(Span::raw("  "));
    Line::from(spans)
}

fn cell_span(cell: Cell) -> Span<'static> {
    let (glyph, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" ● ", Color::Red),
        Cell::Yellow => (" ● ", Color::Yellow),
        Cell::Blue => (" ● ", Color::Blue),
    };
    Span::styled(glyph, Style::default().fg(color))
}

fn frame_line(left: char, right: char) -> Line<'static> {
    Line::from(format!("  {left}{}{right}", "═".repeat(COLS * 3 + 1)))
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::with_capacity(ROWS + 4);
    lines.push(selector_line(selected_column, |col| format!(" {} ", col + 1)));
    lines.push(frame_line('╔', '╗'));

    lines.extend((0..ROWS).map(|row| {
        let mut spans = vec![Span::raw("  ║")];
        spans.extend((0..COLS).map(|col| cell_span(board.get(row, col))));
        spans.push(Span::raw(" ║"));
        Line::from(spans)
    }));

    lines.push(frame_line('╚', '╝'));
    let arrow = |col| if col == selected_column { " ▲ " } else { "   " };
    lines.push(selector_line(selected_column, |col| arrow(col).to_string()));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_status(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let widget = Paragraph::new(message.unwrap_or_default())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let keys = format!("←/→: Move  |  Enter or 1-{COLS}: Drop  |  R: Restart  |  Q: Quit");
    let widget = Paragraph::new(keys)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(widget, area);
}
