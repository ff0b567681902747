//! Per-departure time text.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::domain::{CompactDuration, format_duration};

/// Clock format for absolute times: two-digit 24-hour hour and minute.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// The time column of a departure row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureTime {
    /// Clock time or countdown
    pub text: String,

    /// Delay annotation, present only for off-schedule departures
    pub delay: Option<String>,
}

impl DepartureTime {
    /// Whether a delay annotation is attached.
    pub fn has_delay(&self) -> bool {
        self.delay.is_some()
    }
}

/// Decide what to show in a departure's time column.
///
/// With `show_absolute` the scheduled time is shown as a clock time in
/// `now`'s timezone. Otherwise it is a countdown from `now`, which may be
/// negative for departures already due. A non-zero delay adds an annotation
/// formatted like a countdown.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use departure_card::plan::resolve_time_text;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
/// let scheduled = now + TimeDelta::seconds(125);
///
/// let countdown = resolve_time_text(scheduled, 0, false, &now);
/// assert_eq!(countdown.text, "2min");
/// assert!(!countdown.has_delay());
///
/// let clock = resolve_time_text(scheduled, 300, true, &now);
/// assert_eq!(clock.text, "10:02");
/// assert_eq!(clock.delay.as_deref(), Some("5min"));
/// ```
pub fn resolve_time_text<Tz>(
    scheduled_at: DateTime<Utc>,
    delay_seconds: i64,
    show_absolute: bool,
    now: &DateTime<Tz>,
) -> DepartureTime
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let text = if show_absolute {
        scheduled_at
            .with_timezone(&now.timezone())
            .format(CLOCK_FORMAT)
            .to_string()
    } else {
        let remaining = scheduled_at - now.with_timezone(&Utc);
        CompactDuration::from_delta(remaining).to_string()
    };

    let delay = (delay_seconds != 0).then(|| format_duration(delay_seconds as f64));

    DepartureTime { text, delay }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn countdown() {
        let t = resolve_time_text(now() + TimeDelta::seconds(125), 0, false, &now());
        assert_eq!(t.text, "2min");
        assert_eq!(t.delay, None);
        assert!(!t.has_delay());
    }

    #[test]
    fn countdown_under_a_minute_is_now() {
        let t = resolve_time_text(now() + TimeDelta::seconds(40), 0, false, &now());
        assert_eq!(t.text, "now");
    }

    #[test]
    fn countdown_hours() {
        let t = resolve_time_text(now() + TimeDelta::minutes(125), 0, false, &now());
        assert_eq!(t.text, "2h 05min");
    }

    #[test]
    fn countdown_in_the_past() {
        let t = resolve_time_text(now() - TimeDelta::seconds(30), 0, false, &now());
        assert_eq!(t.text, "now");

        let t = resolve_time_text(now() - TimeDelta::seconds(90), 0, false, &now());
        assert_eq!(t.text, "-1min");
    }

    #[test]
    fn countdown_ignores_viewer_timezone() {
        let berlin = FixedOffset::east_opt(3600).unwrap();
        let local_now = now().with_timezone(&berlin);
        let t = resolve_time_text(now() + TimeDelta::minutes(3), 0, false, &local_now);
        assert_eq!(t.text, "3min");
    }

    #[test]
    fn absolute_uses_viewer_timezone() {
        let scheduled = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();

        let t = resolve_time_text(scheduled, 0, true, &now());
        assert_eq!(t.text, "09:05");

        let berlin = FixedOffset::east_opt(3600).unwrap();
        let t = resolve_time_text(scheduled, 0, true, &now().with_timezone(&berlin));
        assert_eq!(t.text, "10:05");
    }

    #[test]
    fn delay_annotation() {
        let t = resolve_time_text(now() + TimeDelta::seconds(125), 300, false, &now());
        assert_eq!(t.text, "2min");
        assert_eq!(t.delay.as_deref(), Some("5min"));
        assert!(t.has_delay());
    }

    #[test]
    fn short_delay_reads_now() {
        let t = resolve_time_text(now(), 30, false, &now());
        assert!(t.has_delay());
        assert_eq!(t.delay.as_deref(), Some("now"));
    }

    #[test]
    fn early_departure_is_annotated() {
        let t = resolve_time_text(now(), -120, true, &now());
        assert_eq!(t.delay.as_deref(), Some("-2min"));
    }
}
