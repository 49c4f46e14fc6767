//! Dialog and draft-element classification heuristics.
//!
//! Everything here reads pruned text ([`dom::visible_text`]), so a dialog
//! classifies the same way before and after its annotations are injected.

use kuchiki::NodeRef;
use lazy_static::lazy_static;
use regex::Regex;

use impost_schedule::patterns;

use crate::dom;

/// Phrases that mark a compose or edit dialog. Any hit disqualifies the
/// subtree before draft signals are even considered.
const COMPOSE_MARKERS: [&str; 10] = [
    "new thread",
    "add a topic",
    "what's new?",
    "attach media",
    "add a gif",
    "add an emoji",
    "add a poll",
    "add a location",
    "add to thread",
    "anyone can reply",
];

/// Phrases that only scheduled-drafts dialogs use.
const SCHEDULING_PHRASES: [&str; 4] = [
    "posting tomorrow at",
    "posting today at",
    "posting in",
    "scheduled for",
];

/// Generic scheduling hints for the per-element check.
const SCHEDULING_HINTS: [&str; 5] = [
    "posting today",
    "today at",
    "posting tomorrow",
    "tomorrow at",
    "posting in",
];

/// Elements with less trimmed text than this cannot be draft items.
const MIN_SCHEDULEABLE_TEXT: usize = 5;

lazy_static! {
    static ref MULTI_POSTING_RE: Regex = Regex::new(r"posting (today|tomorrow) at").unwrap();
}

/// Decide whether a subtree is the drafts dialog.
///
/// Compose markers reject immediately. Otherwise the text must mention
/// "draft" somewhere and either carry an explicit scheduling phrase or
/// several "posting ... at" entries.
pub fn is_drafts_dialog(node: &NodeRef) -> bool {
    let text = dom::visible_text(node).to_lowercase();

    if COMPOSE_MARKERS.iter().any(|marker| text.contains(marker)) {
        return false;
    }

    let has_draft_word = text.contains("draft");
    let has_scheduling_phrase = SCHEDULING_PHRASES.iter().any(|phrase| text.contains(phrase));
    let multiple_scheduled = MULTI_POSTING_RE.find_iter(&text).count() > 1;

    has_draft_word && (has_scheduling_phrase || multiple_scheduled)
}

/// Decide whether one element holds scheduleable draft content: enough
/// text plus a clock time, weekday mention, hint phrase, relative offset,
/// or bare day keyword.
pub fn has_scheduleable_content(node: &NodeRef) -> bool {
    let text = dom::visible_text(node).to_lowercase();
    let text = text.trim();

    if text.len() < MIN_SCHEDULEABLE_TEXT {
        return false;
    }

    patterns::has_clock_time(text)
        || patterns::mentioned_weekday(text).is_some()
        || SCHEDULING_HINTS.iter().any(|hint| text.contains(hint))
        || patterns::has_relative_offset(text)
        || patterns::has_day_keyword(text)
}
