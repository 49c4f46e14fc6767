//! Schedule extraction integration tests
//!
//! End-to-end coverage of the extraction rules plus extract/format
//! round-trips against a pinned clock.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
use impost_schedule::{fallback_schedule, format_relative, parse_schedule, NO_SCHEDULE_LABEL};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

// Monday, 2025-06-02 10:00 UTC.
fn monday_10am() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(42)
}

// === Clock resolution across day qualifiers ===

#[rstest]
#[case("Posting today at 2:30 PM", 2025, 6, 2, 14, 30)]
#[case("Posting tomorrow at 2:30 PM", 2025, 6, 3, 14, 30)]
#[case("posting wednesday at 8:45 am", 2025, 6, 4, 8, 45)]
#[case("Saturday at 12:00 PM PST", 2025, 6, 7, 12, 0)]
#[case("sunday at 12:01 am", 2025, 6, 8, 0, 1)]
fn test_clock_day_resolution(
    #[case] text: &str,
    #[case] year: i32,
    #[case] month: u32,
    #[case] day: u32,
    #[case] hour: u32,
    #[case] minute: u32,
) {
    let scheduled = parse_schedule(text, monday_10am(), &mut seeded());
    assert_eq!(
        scheduled,
        Some(Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()),
        "text: {}",
        text
    );
}

// === Weekday sampling ===

#[rstest]
#[case("tuesday meeting", Weekday::Tue)]
#[case("posting thursday", Weekday::Thu)]
#[case("Friday! big announcement", Weekday::Fri)]
#[case("Monday is the day", Weekday::Mon)]
fn test_weekday_mention_lands_on_that_weekday(#[case] text: &str, #[case] expected: Weekday) {
    let scheduled = parse_schedule(text, monday_10am(), &mut seeded())
        .unwrap_or_else(|| panic!("no schedule extracted from: {}", text));
    assert_eq!(scheduled.weekday(), expected, "text: {}", text);
    assert!(scheduled > monday_10am(), "must resolve to the future");
}

#[test]
fn test_weekday_mention_is_seed_stable() {
    let a = parse_schedule("tuesday meeting", monday_10am(), &mut StdRng::seed_from_u64(9));
    let b = parse_schedule("tuesday meeting", monday_10am(), &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

// === Extract/format round-trips ===

#[test]
fn test_tomorrow_clock_formats_as_day_hour_composite() {
    let now = monday_10am();
    let scheduled = parse_schedule("Posting tomorrow at 2:30 PM", now, &mut seeded()).unwrap();
    // 28.5 hours out: one whole day plus four whole hours.
    assert_eq!(format_relative(Some(scheduled), now), "in 1 day - 4 hours");
}

#[test]
fn test_exact_offset_round_trips() {
    let now = monday_10am();
    let scheduled = parse_schedule("in 5 hours", now, &mut seeded()).unwrap();
    assert_eq!(scheduled, now + Duration::hours(5));
    assert_eq!(format_relative(Some(scheduled), now), "in 5 hours");
}

#[test]
fn test_sampled_times_format_consistently() {
    // Whatever the sampler picks, the label must agree with the instant.
    let now = monday_10am();
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let scheduled = parse_schedule("posting friday", now, &mut rng).unwrap();
        let label = format_relative(Some(scheduled), now);
        let days = (scheduled - now).num_days();
        if days > 0 {
            assert!(label.starts_with(&format!("in {} day", days)), "label: {}", label);
        } else {
            assert!(label.starts_with("in "), "label: {}", label);
        }
    }
}

#[test]
fn test_missing_schedule_label() {
    assert_eq!(
        format_relative(None, monday_10am()),
        NO_SCHEDULE_LABEL
    );
}

// === Positional fallback ===

#[test]
fn test_fallback_orders_siblings_chronologically() {
    let now = monday_10am();
    let times: Vec<_> = (0..7).map(|i| fallback_schedule(i, now)).collect();
    for pair in times.windows(2) {
        assert!(pair[0] < pair[1], "offsets must strictly increase");
    }
}

#[test]
fn test_fallback_is_deterministic() {
    let now = monday_10am();
    assert_eq!(fallback_schedule(3, now), fallback_schedule(3, now));
}
