//! Relative display labels for scheduled times.

use chrono::{DateTime, Utc};

/// Label shown for records with no recoverable schedule.
pub const NO_SCHEDULE_LABEL: &str = "No schedule";

/// Render the gap between `scheduled_at` and `now` as a short label: the
/// coarsest non-zero unit with at most one refinement, e.g.
/// "in 2 days - 5 hours". `None` renders as [`NO_SCHEDULE_LABEL`]; anything
/// due now or in the past renders as "in a few seconds".
pub fn format_relative(scheduled_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let at = match scheduled_at {
        Some(at) => at,
        None => return NO_SCHEDULE_LABEL.to_string(),
    };

    let delta = at - now;
    if delta.num_seconds() <= 0 {
        return "in a few seconds".to_string();
    }

    let days = delta.num_days();
    let hours = delta.num_hours();
    if days > 0 {
        let remainder = hours - days * 24;
        if remainder > 0 {
            return format!("in {} - {}", unit(days, "day"), unit(remainder, "hour"));
        }
        return format!("in {}", unit(days, "day"));
    }
    if hours > 0 {
        return format!("in {}", unit(hours, "hour"));
    }
    let minutes = delta.num_minutes();
    if minutes > 0 {
        return format!("in {}", unit(minutes, "minute"));
    }
    format!("in {}", unit(delta.num_seconds(), "second"))
}

fn unit(count: i64, name: &str) -> String {
    if count == 1 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", count, name)
    }
}
