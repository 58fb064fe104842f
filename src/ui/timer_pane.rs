use crate::app::AppState;
use crate::domain::format_duration;
use crate::ui::styles::{countdown_style, default_style, gauge_style, paused_style};
use chrono::Duration;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Format a wall-clock timestamp as "HH:MM:SS"
fn format_time(dt: chrono::DateTime<chrono::Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Remaining time rounded up to whole seconds, floored at zero
fn display_remaining(remaining: Duration) -> String {
    let ms = remaining.num_milliseconds().max(0);
    let secs = (ms + 999) / 1000;
    format_duration(Duration::seconds(secs))
}

/// Render the "Start: HH:MM:SS - End: HH:MM:SS" header line
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("Start: {}", format_time(app.timer.started_at())),
            default_style(),
        ),
        Span::raw(" - "),
        Span::styled(
            format!("End: {}", format_time(app.timer.ends_at())),
            default_style(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the remaining-time readout
pub fn render_countdown(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    if app.timer.is_completed() {
        spans.push(Span::styled("Time is up!", countdown_style()));
    } else {
        spans.push(Span::styled(
            display_remaining(app.timer.remaining()),
            countdown_style(),
        ));
        if !app.timer.is_running() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("(paused)", paused_style()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the progress gauge with a percentage label
pub fn render_gauge(f: &mut Frame, app: &AppState, area: Rect) {
    let fraction = app.timer.progress_fraction();
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(fraction)
        .label(format!("{:.0}%", fraction * 100.0));
    f.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_remaining_rounds_up() {
        assert_eq!(display_remaining(Duration::milliseconds(9_900)), "10s");
        assert_eq!(display_remaining(Duration::milliseconds(10_000)), "10s");
        assert_eq!(display_remaining(Duration::milliseconds(100)), "1s");
    }

    #[test]
    fn test_display_remaining_floors_at_zero() {
        assert_eq!(display_remaining(Duration::zero()), "0s");
        assert_eq!(display_remaining(Duration::seconds(-30)), "0s");
    }

    #[test]
    fn test_display_remaining_composed() {
        assert_eq!(
            display_remaining(Duration::hours(1) + Duration::minutes(10) + Duration::seconds(15)),
            "1h10m15s"
        );
    }
}
