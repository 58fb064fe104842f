use std::time::Duration;

/// Fixed tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

/// Get tick duration for the event loop poll timeout
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get the tick interval as a signed duration for countdown arithmetic
pub fn tick_interval() -> chrono::Duration {
    chrono::Duration::milliseconds(DEFAULT_TICK_MS as i64)
}
