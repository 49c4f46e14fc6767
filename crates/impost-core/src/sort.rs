//! Record ordering.

use std::cmp::Ordering;

use crate::record::DraftRecord;
use crate::settings::SortOrder;

/// Order records by schedule. Unscheduled records sink to the end in
/// either direction, and ties keep their input order, which preserves the
/// positional-fallback ordering for same-time drafts.
pub fn sort_records(records: &mut [DraftRecord], direction: SortOrder) {
    records.sort_by(|a, b| compare(a, b, direction));
}

/// Put records back in the order they were extracted in.
pub fn restore_original_order(records: &mut [DraftRecord]) {
    records.sort_by_key(|record| record.original_index);
}

fn compare(a: &DraftRecord, b: &DraftRecord, direction: SortOrder) -> Ordering {
    match (a.scheduled_at, b.scheduled_at) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_at), Some(b_at)) => match direction {
            SortOrder::Earliest => a_at.cmp(&b_at),
            SortOrder::Latest => b_at.cmp(&a_at),
        },
    }
}
