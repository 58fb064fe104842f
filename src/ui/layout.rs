use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Card width in columns
pub const CARD_WIDTH: u16 = 52;

/// Content padding inside the card border
pub const PADDING_VERTICAL: u16 = 1;
pub const PADDING_HORIZONTAL: u16 = 4;

/// Row layout inside the timer card
pub struct CardLayout {
    pub header_area: Rect,
    pub countdown_area: Rect,
    pub gauge_area: Rect,
    pub body_area: Rect,
    pub hints_area: Rect,
}

/// Create the card layout, padded inside the border
/// - Start/end header (1 row), spacer (1 row)
/// - Countdown readout (1 row), progress gauge (1 row), spacer (1 row)
/// - Body: log entries, adjustment input, error (grows with content)
/// - Keybinding hints (1 row)
pub fn create_layout(inner: Rect) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .vertical_margin(PADDING_VERTICAL)
        .horizontal_margin(PADDING_HORIZONTAL)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    CardLayout {
        header_area: chunks[0],
        countdown_area: chunks[2],
        gauge_area: chunks[3],
        body_area: chunks[5],
        hints_area: chunks[6],
    }
}

/// Center a card of the given size inside the terminal area
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
