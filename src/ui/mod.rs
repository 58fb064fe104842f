pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod log_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::InputMode;
use input_form::render_adjust_input;
use keybindings::render_keybindings;
use layout::{centered_rect, create_layout, CARD_WIDTH};
use log_pane::{render_error, render_log_pane};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Clear},
    Frame,
};
use styles::border_style;
use timer_pane::{render_countdown, render_gauge, render_header};

/// Main render function - draws the centered timer card
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // The card grows with its body: log entries, the adjustment input and
    // the pending error
    let log_height = app.log.len() as u16;
    let input_height = if app.mode == InputMode::Adjusting { 2 } else { 0 };
    let error_height = if app.error.is_some() { 1 } else { 0 };
    let body_height = log_height + input_height + error_height;

    // Borders, content padding and the six fixed layout rows
    let card = centered_rect(size, CARD_WIDTH, body_height + 10);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(card);
    f.render_widget(Clear, card);
    f.render_widget(block, card);

    let card_layout = create_layout(inner);
    render_header(f, app, card_layout.header_area);
    render_countdown(f, app, card_layout.countdown_area);
    render_gauge(f, app, card_layout.gauge_area);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(log_height),
            Constraint::Length(input_height),
            Constraint::Length(error_height),
            Constraint::Min(0),
        ])
        .split(card_layout.body_area);
    render_log_pane(f, app, body_chunks[0]);
    render_adjust_input(f, app, body_chunks[1]);
    render_error(f, app, body_chunks[2]);

    render_keybindings(f, app, card_layout.hints_area);
}
