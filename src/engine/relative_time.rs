//! "Updated 3 days ago" style distances between two instants.

use chrono::{DateTime, Datelike, Utc};

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_ALMOST_TWO_DAYS: f64 = 2520.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Whole calendar months from `earlier` to `later`.
fn whole_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months.max(0)
}

/// Unsigned distance, e.g. `"about 2 hours"` or `"over 1 year"`.
pub fn format_distance(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds() as f64;
    let minutes = (seconds / 60.0).round();

    if minutes < 1.0 {
        "less than a minute".to_string()
    } else if minutes < 45.0 {
        plural(minutes as i64, "minute")
    } else if minutes < 90.0 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural((minutes / 60.0).round() as i64, "hour"))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        plural((minutes / MINUTES_IN_DAY).round() as i64, "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!(
            "about {}",
            plural((minutes / MINUTES_IN_MONTH).round() as i64, "month")
        )
    } else {
        let months = whole_months_between(earlier, later);
        if months < 12 {
            plural((minutes / MINUTES_IN_MONTH).round() as i64, "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => format!("about {}", plural(years, "year")),
                3..=8 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    }
}

/// Distance from `now` with a direction suffix: `"2 days ago"` or `"in 2 days"`.
pub fn format_distance_to_now(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = format_distance(instant, now);
    if instant > now {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}
