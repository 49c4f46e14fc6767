//! Shared recognizers for schedule-bearing text.
//!
//! The collector's "is this element scheduleable" check and the extraction
//! rules test the same surface patterns; they live here so the two cannot
//! drift apart.

use lazy_static::lazy_static;
use regex::Regex;

/// Weekday names in week order, Sunday first to line up with
/// `chrono::Weekday::num_days_from_sunday`.
pub const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Words that mark a weekday mention as schedule-like when they follow it
/// ("friday review", "monday at", ...).
const DAY_FOLLOWERS: [&str; 9] = [
    "at", "review", "meeting", "motivation", "planning", "session", "post", "is", "will",
];

lazy_static! {
    // "posting tomorrow at 2:30 pm PST", "friday at 11:05 am"
    pub static ref DAY_CLOCK_RE: Regex = Regex::new(
        r"(?i)(?:posting\s+)?(?:today|tomorrow|sunday|monday|tuesday|wednesday|thursday|friday|saturday)\s+at\s+(?P<hour>\d{1,2}):(?P<minute>\d{2})\s*(?P<meridiem>am|pm)(?:\s+[a-z]{3}[+-]?\d{1,2})?"
    )
    .unwrap();

    // Bare clock anywhere in the text: "2:30 pm"
    pub static ref CLOCK_RE: Regex = Regex::new(
        r"(?i)(?P<hour>\d{1,2}):(?P<minute>\d{2})\s*(?P<meridiem>am|pm)(?:\s+[a-z]{3}[+-]?\d{1,2})?"
    )
    .unwrap();

    // First day word anywhere in the text. The clock rule resolves its date
    // from this, wherever the word sits relative to the clock.
    pub static ref DAY_QUALIFIER_RE: Regex = Regex::new(
        r"(?i)(?P<day>today|tomorrow|sunday|monday|tuesday|wednesday|thursday|friday|saturday)"
    )
    .unwrap();

    // "in 3 hours" / "in 2 days". No leading boundary: "within 3 hours"
    // counts as an offset.
    pub static ref IN_HOURS_RE: Regex = Regex::new(r"(?i)in (?P<n>\d+) hours?").unwrap();
    pub static ref IN_DAYS_RE: Regex = Regex::new(r"(?i)in (?P<n>\d+) days?").unwrap();

    // Bare day keywords, used as collection hints only
    pub static ref TODAY_RE: Regex = Regex::new(r"(?i)\btoday\b").unwrap();
    pub static ref TOMORROW_RE: Regex = Regex::new(r"(?i)\btomorrow\b").unwrap();

    // "<day>" opening the text or a sentence
    static ref DAY_SENTENCE_START: Vec<Regex> = DAY_NAMES
        .iter()
        .map(|day| Regex::new(&format!(r"(?i)(^|[.!?])\s*{}\b", day)).unwrap())
        .collect();
}

/// True when the text carries an explicit `H:MM am/pm` clock.
pub fn has_clock_time(text: &str) -> bool {
    CLOCK_RE.is_match(text)
}

/// First weekday the text mentions in a schedule-like position, scanning
/// week order from Sunday. Returns the day's index from Sunday.
pub fn mentioned_weekday(text: &str) -> Option<usize> {
    let lowered = text.to_lowercase();
    (0..DAY_NAMES.len()).find(|&index| weekday_mentioned(&lowered, index))
}

fn weekday_mentioned(lowered: &str, index: usize) -> bool {
    let day = DAY_NAMES[index];
    if lowered.contains(&format!("posting {}", day)) || lowered.contains(&format!("{}!", day)) {
        return true;
    }
    if DAY_FOLLOWERS
        .iter()
        .any(|follower| lowered.contains(&format!("{} {}", day, follower)))
    {
        return true;
    }
    DAY_SENTENCE_START[index].is_match(lowered)
}

/// True for "in N hours" / "in N days" offsets.
pub fn has_relative_offset(text: &str) -> bool {
    IN_HOURS_RE.is_match(text) || IN_DAYS_RE.is_match(text)
}

/// True when a bare "today" or "tomorrow" word appears.
pub fn has_day_keyword(text: &str) -> bool {
    TODAY_RE.is_match(text) || TOMORROW_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_detection() {
        assert!(has_clock_time("posting tomorrow at 2:30 pm"));
        assert!(has_clock_time("AT 11:05 AM PST"));
        assert!(has_clock_time("ships 9:00pm"));
        assert!(!has_clock_time("posting tomorrow"));
        assert!(!has_clock_time("2:30"));
    }

    #[test]
    fn test_clock_with_timezone_offset() {
        assert!(has_clock_time("Sunday at 3:00 PM PST+2"));
    }

    #[test]
    fn test_mentioned_weekday_followers() {
        assert_eq!(mentioned_weekday("posting friday"), Some(5));
        assert_eq!(mentioned_weekday("Monday planning doc"), Some(1));
        assert_eq!(mentioned_weekday("the tuesday session ran long"), Some(2));
        assert_eq!(mentioned_weekday("WEDNESDAY!"), Some(3));
    }

    #[test]
    fn test_mentioned_weekday_sentence_start() {
        assert_eq!(mentioned_weekday("Saturday we launch"), Some(6));
        assert_eq!(mentioned_weekday("done. thursday looks open"), Some(4));
    }

    #[test]
    fn test_mentioned_weekday_week_order_precedence() {
        // Sunday is checked before Friday even though Friday comes first in
        // the text.
        assert_eq!(
            mentioned_weekday("friday meeting then sunday review"),
            Some(0)
        );
    }

    #[test]
    fn test_mentioned_weekday_ignores_plain_references() {
        assert_eq!(mentioned_weekday("a tuesday kind of mood"), None);
        assert_eq!(mentioned_weekday("no day here"), None);
    }

    #[test]
    fn test_relative_offsets() {
        assert!(has_relative_offset("in 3 hours"));
        assert!(has_relative_offset("in 1 hour"));
        assert!(has_relative_offset("In 10 Days"));
        assert!(!has_relative_offset("in hours"));
        assert!(!has_relative_offset("in a while"));
    }

    #[test]
    fn test_day_keywords_are_word_bounded() {
        assert!(has_day_keyword("see you today"));
        assert!(has_day_keyword("Tomorrow morning"));
        assert!(!has_day_keyword("todays news"));
        assert!(!has_day_keyword("yesterday"));
    }
}
