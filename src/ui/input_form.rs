use crate::app::AppState;
use crate::ui::styles::input_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the adjustment entry field with its prompt and cursor
pub fn render_adjust_input(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(input) = &app.adjust_input {
        let lines = vec![
            Line::raw("Insert time to add."),
            Line::from(vec![
                Span::raw("> "),
                Span::styled(input.value.clone(), input_style()),
                Span::styled("█", input_style()), // Cursor
            ]),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }
}
