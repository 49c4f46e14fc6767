//! DOM reconciliation: reorder drafts and refresh injected annotations.
//!
//! Every step removes its own stale output before injecting, so running a
//! pass twice leaves the tree byte-identical to running it once.

use kuchiki::NodeRef;

use crate::dom;
use crate::record::DraftRecord;
use crate::settings::{Settings, SortOrder};

/// Selector for the dialog heading that hosts our labels.
const HEADING_SELECTOR: &str = "h1 span";
/// The heading must mention this to be trusted as the drafts heading.
const HEADING_KEYWORD: &str = "Drafts";

/// Apply one reconciliation pass. Records arrive in the order they should
/// appear; each annotation step checks its own settings flag, and a
/// structural miss skips that step only.
pub fn reconcile(dialog: &NodeRef, records: &[DraftRecord], settings: &Settings) {
    apply_status_label(dialog, settings);
    reorder(records);
    apply_time_annotations(records, settings);
    apply_count_badge(dialog, records.len(), settings);
}

/// Remove every injected element and annotation marker below `dialog`.
/// Forced passes run this first so reruns start from host markup.
pub fn strip_enhancements(dialog: &NodeRef) {
    for node in dom::select_all(dialog, dom::INJECTED_SELECTOR) {
        node.detach();
    }
    for node in dom::select_all(dialog, &format!("[{}]", dom::TIME_ADDED_ATTR)) {
        dom::remove_attribute(&node, dom::TIME_ADDED_ATTR);
    }
}

fn apply_status_label(dialog: &NodeRef, settings: &Settings) {
    for stale in dom::select_all(dialog, &class_selector(dom::STATUS_CLASS)) {
        stale.detach();
    }
    if !settings.show_sort_indicator {
        return;
    }
    let heading = match find_drafts_heading(dialog) {
        Some(heading) => heading,
        None => {
            tracing::debug!("drafts heading not found, skipping sort label");
            return;
        }
    };
    let label = match settings.sort_order {
        SortOrder::Earliest => "Earliest First",
        SortOrder::Latest => "Latest First",
    };
    heading.append(dom::new_marked_element("span", dom::STATUS_CLASS, label));
}

fn reorder(records: &[DraftRecord]) {
    let container = match records.first().and_then(|record| record.node.parent()) {
        Some(container) => container,
        None => return,
    };
    // Appending an attached node moves it, so one pass in target order
    // rewrites the child list.
    for record in records {
        container.append(record.node.clone());
    }
}

fn apply_time_annotations(records: &[DraftRecord], settings: &Settings) {
    let stale_selector = format!(
        "{}, {}",
        class_selector(dom::TIME_INFO_CLASS),
        class_selector(dom::TIME_SUBTLE_CLASS)
    );
    for record in records {
        for stale in dom::select_all(&record.node, &stale_selector) {
            stale.detach();
        }
        if !settings.show_time_indicators {
            dom::remove_attribute(&record.node, dom::TIME_ADDED_ATTR);
            continue;
        }
        annotate_record(record);
        dom::set_attribute(&record.node, dom::TIME_ADDED_ATTR, "true");
    }
}

fn annotate_record(record: &DraftRecord) {
    let target = dom::find_text_node_containing(&record.node, "posting")
        .and_then(|text_node| text_node.parent());
    match target {
        Some(parent) => {
            parent.append(dom::new_marked_element(
                "span",
                dom::TIME_INFO_CLASS,
                &record.scheduled_label,
            ));
        }
        None => {
            record.node.prepend(dom::new_marked_element(
                "div",
                dom::TIME_SUBTLE_CLASS,
                &format!("\u{1F4C5} {}", record.scheduled_label),
            ));
        }
    }
}

fn apply_count_badge(dialog: &NodeRef, count: usize, settings: &Settings) {
    for stale in dom::select_all(dialog, &class_selector(dom::COUNT_BADGE_CLASS)) {
        stale.detach();
    }
    if !settings.show_draft_count || count == 0 {
        return;
    }
    let heading = match find_drafts_heading(dialog) {
        Some(heading) => heading,
        None => {
            tracing::debug!("drafts heading not found, skipping count badge");
            return;
        }
    };
    heading.append(dom::new_marked_element(
        "span",
        dom::COUNT_BADGE_CLASS,
        &format!("\u{1F4CA} {}", count),
    ));
}

/// First `h1 span` in the dialog whose text mentions drafts. The check is
/// case-sensitive like the product heading.
fn find_drafts_heading(dialog: &NodeRef) -> Option<NodeRef> {
    dom::select_all(dialog, HEADING_SELECTOR)
        .into_iter()
        .find(|heading| dom::visible_text(heading).contains(HEADING_KEYWORD))
}

fn class_selector(class: &str) -> String {
    format!(".{}", class)
}
