//! Draft discovery and record building.

use kuchiki::NodeRef;

use impost_schedule::{fallback_schedule, format_relative, parse_schedule};

use crate::classify::has_scheduleable_content;
use crate::content::extract_content;
use crate::dom;
use crate::engine::PassContext;
use crate::record::DraftRecord;

/// Post-like containers, most specific first. The first selector whose
/// matches include a qualifying element wins.
const DRAFT_SELECTORS: [&str; 3] = [
    "div[data-testid*=\"post\"]",
    "div[class*=\"post\"]",
    "div[data-pressable-container=\"true\"]",
];

/// Trimmed-text length window for the generic-div fallback scan.
const FALLBACK_MIN_TEXT: usize = 20;
const FALLBACK_MAX_TEXT: usize = 500;

/// Walk the dialog and build one record per draft element, in DOM order.
pub fn collect_drafts(dialog: &NodeRef, ctx: &mut PassContext<'_>) -> Vec<DraftRecord> {
    find_draft_elements(dialog)
        .iter()
        .enumerate()
        .map(|(index, element)| build_record(element, index, ctx))
        .collect()
}

fn build_record(element: &NodeRef, index: usize, ctx: &mut PassContext<'_>) -> DraftRecord {
    let content = extract_content(element);
    let text = dom::visible_text(element);
    let scheduled_at = parse_schedule(&text, ctx.now, ctx.rng)
        .unwrap_or_else(|| fallback_schedule(dom::sibling_index(element), ctx.now));
    let scheduled_label = format_relative(Some(scheduled_at), ctx.now);

    tracing::debug!("draft {} scheduled {}", index, scheduled_label);

    DraftRecord {
        id: format!("draft_{}", index),
        node: element.clone(),
        content,
        scheduled_at: Some(scheduled_at),
        scheduled_label,
        original_index: index,
    }
}

/// Find the outermost draft elements: selector passes first, then a
/// generic scan of divs whose text size looks like a draft item.
fn find_draft_elements(dialog: &NodeRef) -> Vec<NodeRef> {
    let mut candidates = Vec::new();

    for selector in DRAFT_SELECTORS {
        let qualifying: Vec<NodeRef> = dom::select_all(dialog, selector)
            .into_iter()
            .filter(has_scheduleable_content)
            .collect();
        if !qualifying.is_empty() {
            candidates = qualifying;
            break;
        }
    }

    if candidates.is_empty() {
        candidates = fallback_scan(dialog);
    }

    // Keep outermost elements only; nested matches collapse into their
    // containing draft.
    let mut outermost = Vec::new();
    for element in &candidates {
        let contained = candidates
            .iter()
            .any(|other| other != element && dom::is_ancestor(other, element));
        if !contained {
            outermost.push(element.clone());
        }
    }
    outermost
}

fn fallback_scan(dialog: &NodeRef) -> Vec<NodeRef> {
    let mut found: Vec<NodeRef> = Vec::new();
    for div in dom::select_all(dialog, "div") {
        let text = dom::visible_text(&div);
        let text = text.trim();
        if text.len() <= FALLBACK_MIN_TEXT || text.len() >= FALLBACK_MAX_TEXT {
            continue;
        }
        if !has_scheduleable_content(&div) {
            continue;
        }
        let overlaps = found.iter().any(|existing| {
            dom::is_ancestor(existing, &div) || dom::is_ancestor(&div, existing)
        });
        if !overlaps {
            found.push(div);
        }
    }
    found
}
