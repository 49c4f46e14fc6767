//! Representative-text extraction for draft elements.

use kuchiki::NodeRef;

use crate::dom;

/// Shortest trimmed text node worth keeping; below this is icon noise.
const MIN_FRAGMENT_LEN: usize = 3;
/// A fragment longer than this counts as the draft's body text.
const SUBSTANTIAL_LEN: usize = 10;
/// Stand-in when a draft has no usable text at all.
pub const CONTENT_PLACEHOLDER: &str = "Draft content";

/// Pick the snippet that best represents a draft: the first substantial
/// text node, else the first kept fragment, else a placeholder.
pub fn extract_content(node: &NodeRef) -> String {
    let fragments = dom::visible_text_fragments(node, MIN_FRAGMENT_LEN);
    fragments
        .iter()
        .find(|text| text.len() > SUBSTANTIAL_LEN)
        .or_else(|| fragments.first())
        .cloned()
        .unwrap_or_else(|| CONTENT_PLACEHOLDER.to_string())
}
