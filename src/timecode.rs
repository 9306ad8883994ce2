//! Rendering of playback clocks as display strings.

/// Format a position or duration in seconds as a timer string.
///
/// Durations of an hour or more render as `H:MM:SS` with an unpadded
/// hour digit; anything shorter renders as `M:SS` with an unpadded
/// minute digit. Sub-minute values keep an explicit `0` minutes digit
/// (`0:42`) so adjacent timers line up visually.
///
/// Negative or non-finite input is clamped to zero.
pub fn format_timecode(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_timecode;

    #[test]
    fn sub_minute_keeps_zero_minutes_digit() {
        assert_eq!(format_timecode(0.0), "0:00");
        assert_eq!(format_timecode(9.0), "0:09");
        assert_eq!(format_timecode(59.0), "0:59");
    }

    #[test]
    fn minutes_are_unpadded() {
        assert_eq!(format_timecode(60.0), "1:00");
        assert_eq!(format_timecode(65.0), "1:05");
        assert_eq!(format_timecode(600.0), "10:00");
        assert_eq!(format_timecode(3599.0), "59:59");
    }

    #[test]
    fn hours_pad_minutes_and_seconds() {
        assert_eq!(format_timecode(3600.0), "1:00:00");
        assert_eq!(format_timecode(3661.0), "1:01:01");
        assert_eq!(format_timecode(7322.0), "2:02:02");
        assert_eq!(format_timecode(36610.0), "10:10:10");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_timecode(5.9), "0:05");
        assert_eq!(format_timecode(89.999), "1:29");
    }

    #[test]
    fn invalid_input_clamps_to_zero() {
        assert_eq!(format_timecode(-3.0), "0:00");
        assert_eq!(format_timecode(f64::NAN), "0:00");
        assert_eq!(format_timecode(f64::INFINITY), "0:00");
    }

    #[test]
    fn formatting_is_pure() {
        assert_eq!(format_timecode(90.0), format_timecode(90.0));
    }
}
