use super::duration::{format_duration, parse_duration, ParseDurationError};
use super::timer::CountdownTimer;
use chrono::Duration;

/// A human-readable record of one applied adjustment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
}

impl LogEntry {
    fn for_delta(delta: Duration) -> Self {
        let magnitude = if delta < Duration::zero() {
            Duration::zero() - delta
        } else {
            delta
        };
        let label = if delta < Duration::zero() {
            "Removed"
        } else {
            "Added"
        };
        Self {
            message: format!("{} {}", label, format_duration(magnitude)),
        }
    }
}

/// Parse a signed duration string and apply it to the countdown.
///
/// An empty or zero-delta submission is a silent no-op: no log entry, no
/// error. A parse failure leaves the countdown untouched and is surfaced to
/// the caller.
pub fn apply(
    timer: &mut CountdownTimer,
    input: &str,
) -> Result<Option<LogEntry>, ParseDurationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let delta = parse_duration(input)?;
    if delta == Duration::zero() {
        return Ok(None);
    }

    timer.adjust(delta);
    Ok(Some(LogEntry::for_delta(delta)))
}
