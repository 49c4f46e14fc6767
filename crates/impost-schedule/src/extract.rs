//! Schedule extraction rules.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use rand::Rng;

use crate::patterns::{
    mentioned_weekday, CLOCK_RE, DAY_CLOCK_RE, DAY_NAMES, DAY_QUALIFIER_RE, IN_DAYS_RE,
    IN_HOURS_RE,
};

/// Hour offsets for drafts whose text yields no recognizable time, indexed
/// by the element's position in its sibling list. Ascending, so positions
/// keep their relative order.
pub const FALLBACK_OFFSET_HOURS: [i64; 7] = [2, 4, 8, 16, 25, 30, 48];

// Relative offsets beyond this are treated as noise, not schedules.
const MAX_OFFSET_DAYS: i64 = 365 * 100;

/// Parse a scheduled time out of free-form draft text.
///
/// Rules run in priority order, first match wins: an explicit clock time
/// (with an optional day qualifier), a bare weekday mention, a bare
/// today/tomorrow mention, then "in N hours/days" offsets. Matching is
/// case-insensitive. Returns `None` when nothing matches; callers that need
/// a time anyway use [`fallback_schedule`].
///
/// The weekday and today/tomorrow rules carry no clock, so a time of day is
/// sampled from `rng`; seed it for reproducible runs.
pub fn parse_schedule<R: Rng>(
    text: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<DateTime<Utc>> {
    let text = text.to_lowercase();
    explicit_clock_time(&text, now)
        .or_else(|| weekday_mention(&text, now, rng))
        .or_else(|| day_keyword_mention(&text, now, rng))
        .or_else(|| relative_offset(&text, now))
}

/// Deterministic schedule for text with no recognizable time: a fixed
/// ascending offset chosen by `position`, cycling past the table's end.
pub fn fallback_schedule(position: usize, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(FALLBACK_OFFSET_HOURS[position % FALLBACK_OFFSET_HOURS.len()])
}

fn explicit_clock_time(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = DAY_CLOCK_RE
        .captures(text)
        .or_else(|| CLOCK_RE.captures(text))?;

    let hour: u32 = caps["hour"].parse().ok()?;
    let minute: u32 = caps["minute"].parse().ok()?;
    let hour24 = match (&caps["meridiem"], hour) {
        ("pm", h) if h != 12 => h + 12,
        ("am", 12) => 0,
        (_, h) => h,
    };
    // An out-of-range clock ("19:99 pm") is not a recognized time.
    let time = NaiveTime::from_hms_opt(hour24, minute, 0)?;

    let qualifier = DAY_QUALIFIER_RE.captures(text).map(|c| c["day"].to_string());
    let days_ahead = match qualifier.as_deref() {
        Some("today") | None => 0,
        Some("tomorrow") => 1,
        Some(day) => {
            let target = DAY_NAMES.iter().position(|name| *name == day)? as i64;
            days_until_inclusive(now, target)
        }
    };

    let date = (now + Duration::days(days_ahead)).date_naive();
    let mut scheduled = date.and_time(time).and_utc();
    // Already-passed clock with no day word resolves to tomorrow. Can
    // mis-resolve right at a day boundary; kept as documented behavior.
    if qualifier.is_none() && scheduled <= now {
        scheduled = scheduled + Duration::days(1);
    }
    Some(scheduled)
}

fn weekday_mention<R: Rng>(
    text: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<DateTime<Utc>> {
    let target = mentioned_weekday(text)? as i64;
    let date = (now + Duration::days(days_until_exclusive(now, target))).date_naive();
    // No clock in the text: sample one inside business hours.
    let time = NaiveTime::from_hms_opt(rng.gen_range(9..21), rng.gen_range(0..60), 0)?;
    Some(date.and_time(time).and_utc())
}

fn day_keyword_mention<R: Rng>(
    text: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<DateTime<Utc>> {
    if text.contains("posting today") || text.contains("today at") {
        return Some(now + Duration::hours(rng.gen_range(1..9)));
    }
    if text.contains("posting tomorrow") || text.contains("tomorrow at") {
        return Some(now + Duration::hours(rng.gen_range(24..36)));
    }
    None
}

fn relative_offset(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if let Some(caps) = IN_HOURS_RE.captures(text) {
        let hours: i64 = caps["n"].parse().ok()?;
        if hours <= MAX_OFFSET_DAYS * 24 {
            return Some(now + Duration::hours(hours));
        }
        return None;
    }
    if let Some(caps) = IN_DAYS_RE.captures(text) {
        let days: i64 = caps["n"].parse().ok()?;
        if days <= MAX_OFFSET_DAYS {
            return Some(now + Duration::days(days));
        }
    }
    None
}

/// Days ahead to the target weekday; 0 when today already is that weekday.
fn days_until_inclusive(now: DateTime<Utc>, target: i64) -> i64 {
    let current = now.weekday().num_days_from_sunday() as i64;
    (target - current).rem_euclid(7)
}

/// Days ahead to the next occurrence of the target weekday, today excluded:
/// a bare "sunday" written on a Sunday means next week.
fn days_until_exclusive(now: DateTime<Utc>, target: i64) -> i64 {
    match days_until_inclusive(now, target) {
        0 => 7,
        days => days,
    }
}
