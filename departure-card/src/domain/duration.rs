//! Compact duration formatting for countdowns and delays.
//!
//! Durations are rendered in the form used on departure boards:
//! `"now"`, `"3min"`, `"1h"`, or `"2h 05min"`. Seconds are never shown.

use std::fmt;

use chrono::TimeDelta;

/// Text shown for durations under one minute.
pub const NOW: &str = "now";

/// A display wrapper that formats a number of seconds as a compact duration.
///
/// # Examples
///
/// ```
/// use departure_card::domain::CompactDuration;
///
/// assert_eq!(CompactDuration(0.0).to_string(), "now");
/// assert_eq!(CompactDuration(125.0).to_string(), "2min");
/// assert_eq!(CompactDuration(3900.0).to_string(), "1h 05min");
/// assert_eq!(CompactDuration(4200.0).to_string(), "1h 10min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactDuration(pub f64);

impl CompactDuration {
    /// Build from a chrono delta, keeping millisecond precision.
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self(delta.num_milliseconds() as f64 / 1000.0)
    }
}

impl From<TimeDelta> for CompactDuration {
    fn from(delta: TimeDelta) -> Self {
        Self::from_delta(delta)
    }
}

impl fmt::Display for CompactDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0;
        if !seconds.is_finite() {
            return f.write_str(NOW);
        }

        let (hours, rest) = divmod(seconds, 3600.0);
        let (minutes, _) = divmod(rest, 60.0);

        // Both quotients are whole numbers after `floor`.
        let hours = hours as i64;
        let minutes = minutes as i64;

        if hours != 0 {
            write!(f, "{hours}h")?;
            if minutes >= 10 {
                write!(f, " {minutes}min")?;
            } else if minutes > 0 {
                write!(f, " 0{minutes}min")?;
            }
            Ok(())
        } else if minutes != 0 {
            write!(f, "{minutes}min")
        } else {
            f.write_str(NOW)
        }
    }
}

/// Format a signed number of seconds as a compact duration string.
pub fn format_duration(seconds: f64) -> String {
    CompactDuration(seconds).to_string()
}

/// Split `num` by `denom` into a whole quotient and a remainder.
///
/// The quotient is the floored magnitude. For a negative dividend the sign
/// goes on the quotient, unless the quotient is zero, in which case it goes
/// on the remainder instead. A negative dividend with a non-zero quotient
/// therefore keeps a positive remainder.
fn divmod(num: f64, denom: f64) -> (f64, f64) {
    let quot = num / denom;
    let mut div = quot.abs().floor();
    let mut rem = (num % denom).abs();

    if quot < 0.0 {
        if div == 0.0 {
            rem = -rem;
        } else {
            div = -div;
        }
    }

    (div, rem)
}
