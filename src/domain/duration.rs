use chrono::Duration;
use thiserror::Error;

/// Errors produced when parsing a human-readable duration string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("missing unit after '{0}'")]
    MissingUnit(String),
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// Parse a signed, unit-suffixed duration string like "1h10m15s" or "-30s".
///
/// Components compose left to right (hours `h`, minutes `m`, seconds `s`,
/// milliseconds `ms`); values may be fractional ("1.5h"). A single leading
/// `-` or `+` applies to the whole duration.
pub fn parse_duration(s: &str) -> Result<Duration, ParseDurationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if rest.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    let mut total_ms: i64 = 0;
    let mut chars = rest.chars().peekable();

    while chars.peek().is_some() {
        let mut number = String::new();
        while let Some(c) = chars.peek() {
            if c.is_ascii_digit() || *c == '.' {
                number.push(*c);
                chars.next();
            } else {
                break;
            }
        }

        let mut unit = String::new();
        while let Some(c) = chars.peek() {
            if c.is_alphabetic() {
                unit.push(*c);
                chars.next();
            } else {
                break;
            }
        }

        if number.is_empty() {
            return Err(ParseDurationError::InvalidNumber(unit));
        }
        if unit.is_empty() {
            return Err(ParseDurationError::MissingUnit(number));
        }

        let value: f64 = number
            .parse()
            .map_err(|_| ParseDurationError::InvalidNumber(number.clone()))?;

        let unit_ms = match unit.as_str() {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            "s" => 1_000.0,
            "ms" => 1.0,
            _ => return Err(ParseDurationError::UnknownUnit(unit)),
        };

        total_ms += (value * unit_ms).round() as i64;
    }

    if negative {
        total_ms = -total_ms;
    }

    Ok(Duration::milliseconds(total_ms))
}

/// Format a duration in composable h/m/s form ("1h0m0s", "5m0s", "30s").
///
/// Sub-second remainders are dropped; callers pass a non-negative duration.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("5m").unwrap(), Duration::minutes(5));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::milliseconds(250));
    }

    #[test]
    fn test_parse_composed() {
        assert_eq!(
            parse_duration("1h10m15s").unwrap(),
            Duration::hours(1) + Duration::minutes(10) + Duration::seconds(15)
        );
        assert_eq!(
            parse_duration("2m30s").unwrap(),
            Duration::seconds(150)
        );
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_duration("-30s").unwrap(), Duration::seconds(-30));
        assert_eq!(parse_duration("-1h").unwrap(), Duration::hours(-1));
        assert_eq!(parse_duration("+5m").unwrap(), Duration::minutes(5));
        assert_eq!(
            parse_duration("-1h30m").unwrap(),
            Duration::minutes(-90)
        );
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("0.5s").unwrap(), Duration::milliseconds(500));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_duration("  10s  ").unwrap(), Duration::seconds(10));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_duration(""), Err(ParseDurationError::Empty));
        assert_eq!(parse_duration("-"), Err(ParseDurationError::Empty));
        assert_eq!(
            parse_duration("90"),
            Err(ParseDurationError::MissingUnit("90".to_string()))
        );
        assert_eq!(
            parse_duration("5x"),
            Err(ParseDurationError::UnknownUnit("x".to_string()))
        );
        assert_eq!(
            parse_duration("abc"),
            Err(ParseDurationError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            parse_duration("1..5h"),
            Err(ParseDurationError::InvalidNumber("1..5".to_string()))
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(0)), "0s");
        assert_eq!(format_duration(Duration::seconds(30)), "30s");
        assert_eq!(format_duration(Duration::minutes(5)), "5m0s");
        assert_eq!(format_duration(Duration::hours(1)), "1h0m0s");
        assert_eq!(
            format_duration(Duration::hours(1) + Duration::minutes(10) + Duration::seconds(15)),
            "1h10m15s"
        );
    }

    #[test]
    fn test_format_drops_subsecond() {
        assert_eq!(format_duration(Duration::milliseconds(900)), "0s");
        assert_eq!(format_duration(Duration::milliseconds(1500)), "1s");
    }
}
