use crate::domain::{adjust, CountdownTimer, InputMode, LogEntry};
use crate::ticker;
use chrono::{Duration, Local};
use std::time::Instant;

/// Text buffer for the adjustment entry field
#[derive(Debug, Clone, Default)]
pub struct AdjustInputState {
    pub value: String,
}

impl AdjustInputState {
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

/// Main application state
pub struct AppState {
    pub timer: CountdownTimer,
    pub mode: InputMode,
    /// Present exactly while `mode` is `Adjusting`
    pub adjust_input: Option<AdjustInputState>,
    /// Append-only within a run; cleared by the clear-log command
    pub log: Vec<LogEntry>,
    /// At most one outstanding user-facing error
    pub error: Option<String>,
    pub last_tick: Instant,
}

impl AppState {
    pub fn new(total: Duration) -> Self {
        Self {
            timer: CountdownTimer::new(total, ticker::tick_interval()),
            mode: InputMode::Normal,
            adjust_input: None,
            log: Vec::new(),
            error: None,
            last_tick: Instant::now(),
        }
    }

    /// Advance the countdown by one interval; returns true once when it
    /// finishes
    pub fn tick(&mut self) -> bool {
        self.last_tick = Instant::now();
        self.timer.tick()
    }

    /// Toggle between running and paused
    pub fn toggle_timer(&mut self) {
        self.timer.toggle(Local::now());
    }

    /// Enter adjusting mode with a fresh text buffer
    pub fn start_adjust(&mut self) {
        self.adjust_input = Some(AdjustInputState::default());
        self.error = None;
        self.mode = InputMode::Adjusting;
    }

    /// Apply the buffered text and return to normal mode.
    ///
    /// A parse failure leaves a pending error visible in normal mode.
    pub fn submit_adjust(&mut self) {
        if let Some(input) = self.adjust_input.take() {
            self.error = None;
            match adjust::apply(&mut self.timer, &input.value) {
                Ok(Some(entry)) => self.log.push(entry),
                Ok(None) => {}
                Err(_) => self.error = Some("Invalid input, try again.".to_string()),
            }
        }
        self.mode = InputMode::Normal;
    }

    /// Discard the buffered text and return to normal mode
    pub fn cancel_adjust(&mut self) {
        self.adjust_input = None;
        self.error = None;
        self.mode = InputMode::Normal;
    }

    /// Clear the adjustment log and any pending error
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.error = None;
    }

    pub fn input_push_char(&mut self, c: char) {
        if let Some(input) = &mut self.adjust_input {
            input.push_char(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(input) = &mut self.adjust_input {
            input.backspace();
        }
    }
}
