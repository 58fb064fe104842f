use crate::app::AppState;
use crate::ui::styles::{error_style, log_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the adjustment log, one "> Added 5m0s" line per entry
pub fn render_log_pane(f: &mut Frame, app: &AppState, area: Rect) {
    if app.log.is_empty() {
        return;
    }

    let lines: Vec<Line> = app
        .log
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::raw("> "),
                Span::styled(entry.message.clone(), log_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Render the pending error message, if any
pub fn render_error(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(error) = &app.error {
        let line = Line::from(Span::styled(error.clone(), error_style()));
        f.render_widget(Paragraph::new(line), area);
    }
}
