//! Relative Date Labels
//!
//! Turns an ISO-8601 timestamp into "today", "yesterday" or "<n> days ago".

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Label returned for strings that do not parse as a date
pub const INVALID_DATE: &str = "Invalid Date";

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Relative label for `input` as seen from the current time
pub fn format_days_ago(input: &str) -> String {
    format_days_ago_at(input, Utc::now())
}

/// Relative label for `input` as seen from `now`
///
/// The day count is the floored millisecond difference divided by a day.
/// Future dates are not special-cased and come out as "-n days ago".
pub fn format_days_ago_at(input: &str, now: DateTime<Utc>) -> String {
    let Some(date) = parse_date(input) else {
        return INVALID_DATE.to_string();
    };

    let days = (now - date).num_milliseconds().div_euclid(MS_PER_DAY);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}

/// ISO-8601 UTC timestamp with millisecond precision (`...T12:00:00.000Z`)
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }

    // Date-time without an offset is local time
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|date| date.with_timezone(&Utc));
        }
    }

    // Date-only is UTC midnight
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
