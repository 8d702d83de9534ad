// ABOUTME: Conversions between second counts and clock-style duration strings.
// ABOUTME: Formats as H:MM:SS / M:SS / S or fixed HH:MM:SS, and parses the reverse direction.

/// Splits a second count into (hours, minutes, seconds). Hours are unbounded.
fn split_seconds(total_seconds: u64) -> (u64, u64, u64) {
    let mins = total_seconds / 60;
    (mins / 60, mins % 60, total_seconds % 60)
}

/// Formats seconds by magnitude: `H:MM:SS` when there are hours, `M:SS` when
/// there are minutes, otherwise just the seconds.
///
/// Hours never roll over into days, they just keep growing.
pub fn duration_human(total_seconds: u64) -> String {
    match split_seconds(total_seconds) {
        (0, 0, secs) => secs.to_string(),
        (0, mins, secs) => format!("{mins}:{secs:02}"),
        (hours, mins, secs) => format!("{hours}:{mins:02}:{secs:02}"),
    }
}

/// Formats seconds as `HH:MM:SS`. Past 99 hours the hour field widens.
pub fn duration_hhmmss(total_seconds: u64) -> String {
    let (hours, mins, secs) = split_seconds(total_seconds);
    format!("{hours:02}:{mins:02}:{secs:02}")
}

/// Parses a duration string into seconds.
/// Supports:
/// - Plain integers (seconds)
/// - HH:MM:SS format
/// - MM:SS format
/// - Go-style durations like "1h30m", "45m", "2h"
///
/// Returns None if parsing fails.
pub fn parse_duration_seconds(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(secs) = s.parse::<u64>() {
        return Some(secs);
    }

    if s.contains(':') {
        return parse_colon_format(s);
    }

    parse_duration::parse(s).ok().map(|d| d.as_secs())
}

fn parse_colon_format(s: &str) -> Option<u64> {
    let parts: Vec<&str> = s.split(':').collect();

    let (hours, mins, secs) = match parts.as_slice() {
        [m, sec] => (0, m.parse::<u64>().ok()?, sec.parse::<u64>().ok()?),
        [h, m, sec] => (
            h.parse::<u64>().ok()?,
            m.parse::<u64>().ok()?,
            sec.parse::<u64>().ok()?,
        ),
        _ => return None,
    };

    hours
        .checked_mul(3600)?
        .checked_add(mins.checked_mul(60)?)?
        .checked_add(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_seconds_only() {
        assert_eq!(duration_human(0), "0");
        assert_eq!(duration_human(7), "7");
        assert_eq!(duration_human(59), "59");
    }

    #[test]
    fn test_human_minutes() {
        assert_eq!(duration_human(60), "1:00");
        assert_eq!(duration_human(65), "1:05");
        assert_eq!(duration_human(3599), "59:59");
    }

    #[test]
    fn test_human_hours() {
        assert_eq!(duration_human(3600), "1:00:00");
        assert_eq!(duration_human(3661), "1:01:01");
        assert_eq!(duration_human(360_000), "100:00:00");
    }

    #[test]
    fn test_hhmmss() {
        assert_eq!(duration_hhmmss(0), "00:00:00");
        assert_eq!(duration_hhmmss(59), "00:00:59");
        assert_eq!(duration_hhmmss(3661), "01:01:01");
        assert_eq!(duration_hhmmss(360_000), "100:00:00");
    }

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_duration_seconds("123"), Some(123));
        assert_eq!(parse_duration_seconds("0"), Some(0));
    }

    #[test]
    fn test_parse_colon_formats() {
        assert_eq!(parse_duration_seconds("01:02:03"), Some(3723));
        assert_eq!(parse_duration_seconds("05:30"), Some(330));
        assert_eq!(parse_duration_seconds("1:2:3:4"), None);
    }

    #[test]
    fn test_parse_go_duration() {
        assert_eq!(parse_duration_seconds("1h30m"), Some(5400));
        assert_eq!(parse_duration_seconds("45m"), Some(2700));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration_seconds("").is_none());
        assert!(parse_duration_seconds("   ").is_none());
        assert!(parse_duration_seconds("not a duration").is_none());
    }

    #[test]
    fn test_format_parse_agree() {
        for secs in [0, 59, 61, 3599, 3600, 86_399, 360_000] {
            assert_eq!(parse_duration_seconds(&duration_hhmmss(secs)), Some(secs));
        }
    }
}
