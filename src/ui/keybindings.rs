use crate::app::AppState;
use crate::domain::Command;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key and action label for a command; the toggle label tracks the running
/// flag
fn hint_for(command: Command, running: bool) -> (&'static str, &'static str) {
    match command {
        Command::Toggle => ("s", if running { "stop" } else { "start" }),
        Command::Add => ("a", "add"),
        Command::Submit => ("enter", "send"),
        Command::Cancel => ("esc", "go back"),
        Command::ClearLog => ("c", "clear"),
        Command::Quit => ("q", "quit"),
    }
}

/// Render the keybindings hint bar for the commands enabled in the current
/// mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();
    for (i, command) in app.mode.available_commands().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let (key, action) = hint_for(*command, app.timer.is_running());
        spans.push(Span::raw(format!("{} {}", key, action)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(hint_style());
    f.render_widget(paragraph, area);
}
