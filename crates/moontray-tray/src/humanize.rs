//! Human-readable durations and clock times.

use chrono::{DateTime, TimeZone, Utc};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
/// Average month length over the 400-year Gregorian cycle.
const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;

/// Shown when no completion time can be derived.
const UNKNOWN_CLOCK: &str = "--:--";

/// Formats a duration as a relative phrase ("a few seconds", "3 hours").
///
/// Each unit is rounded and the first matching band wins:
///
/// | Rounded value        | Output          |
/// |----------------------|-----------------|
/// | seconds ≤ 44         | a few seconds   |
/// | minutes ≤ 1          | a minute        |
/// | minutes < 45         | N minutes       |
/// | hours ≤ 1            | an hour         |
/// | hours < 22           | N hours         |
/// | days ≤ 1             | a day           |
/// | days < 26            | N days          |
/// | months ≤ 1           | a month         |
/// | months < 11          | N months        |
/// | years ≤ 1            | a year          |
/// | otherwise            | N years         |
///
/// Negative and non-finite inputs are treated as zero.
#[must_use]
pub fn humanize(seconds: f64) -> String {
    let secs = if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    };

    let minutes = (secs / SECONDS_PER_MINUTE).round();
    let hours = (secs / SECONDS_PER_HOUR).round();
    let days_exact = secs / SECONDS_PER_DAY;
    let days = days_exact.round();
    let months = (days_exact / DAYS_PER_MONTH).round();
    let years = (days_exact / DAYS_PER_MONTH / 12.0).round();

    if secs.round() <= 44.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Formats a completion time as `HH:MM` in the given time zone.
///
/// Returns `--:--` when the time is unknown.
#[must_use]
pub fn format_eta<Tz>(eta: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    eta.map_or_else(
        || UNKNOWN_CLOCK.to_string(),
        |time| time.with_timezone(tz).format("%H:%M").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_humanize_bands() {
        assert_eq!(humanize(0.0), "a few seconds");
        assert_eq!(humanize(44.0), "a few seconds");
        assert_eq!(humanize(45.0), "a minute");
        assert_eq!(humanize(89.0), "a minute");
        assert_eq!(humanize(90.0), "2 minutes");
        assert_eq!(humanize(44.0 * 60.0), "44 minutes");
        assert_eq!(humanize(45.0 * 60.0), "an hour");
        assert_eq!(humanize(90.0 * 60.0), "2 hours");
        assert_eq!(humanize(21.0 * 3_600.0), "21 hours");
        assert_eq!(humanize(22.0 * 3_600.0), "a day");
        assert_eq!(humanize(3.0 * 86_400.0), "3 days");
        assert_eq!(humanize(26.0 * 86_400.0), "a month");
        assert_eq!(humanize(100.0 * 86_400.0), "3 months");
        assert_eq!(humanize(340.0 * 86_400.0), "a year");
        assert_eq!(humanize(3.0 * 365.0 * 86_400.0), "3 years");
    }

    #[test]
    fn test_humanize_rejects_bad_input() {
        assert_eq!(humanize(-500.0), "a few seconds");
        assert_eq!(humanize(f64::NAN), "a few seconds");
    }

    #[test]
    fn test_format_eta_in_zone() {
        let eta = Utc.with_ymd_and_hms(2024, 6, 1, 21, 5, 0).unwrap();
        let utc_plus_two = FixedOffset::east_opt(2 * 3_600).unwrap();

        assert_eq!(format_eta(Some(eta), &Utc), "21:05");
        assert_eq!(format_eta(Some(eta), &utc_plus_two), "23:05");
    }

    #[test]
    fn test_format_eta_unknown() {
        assert_eq!(format_eta(None, &Utc), "--:--");
    }
}
