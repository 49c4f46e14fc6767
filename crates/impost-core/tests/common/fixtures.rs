//! Shared DOM fixtures for engine tests

use kuchiki::traits::*;
use kuchiki::NodeRef;

/// Parse a full page and return the document node.
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// One draft item the way the host lays them out: body text first, then
/// the schedule line.
#[allow(dead_code)]
pub fn draft_item(id: &str, body: &str, schedule_line: &str) -> String {
    format!(
        "<div id=\"{}\" data-pressable-container=\"true\"><p>{}</p><span>{}</span></div>",
        id, body, schedule_line
    )
}

/// A page with one scheduled-drafts dialog holding the given items.
#[allow(dead_code)]
pub fn drafts_dialog_page(items: &[String]) -> NodeRef {
    let html = format!(
        "<html><body><div id=\"app\"><div role=\"dialog\" aria-modal=\"true\">\
         <h1><span>Drafts</span></h1><main>{}</main></div></div></body></html>",
        items.concat()
    );
    parse_document(&html)
}

/// A compose dialog page that must never classify as a drafts dialog.
#[allow(dead_code)]
pub fn compose_dialog_page() -> NodeRef {
    parse_document(
        "<html><body><div role=\"dialog\" aria-modal=\"true\">\
         <h1><span>New thread</span></h1>\
         <div>What's new?</div>\
         <div>Posting tomorrow at 2:30 PM draft preview</div>\
         <button>Add a poll</button><button>Anyone can reply</button>\
         </div></body></html>",
    )
}

/// The first dialog element of a parsed page.
#[allow(dead_code)]
pub fn dialog_of(document: &NodeRef) -> NodeRef {
    document
        .select_first("[role=\"dialog\"]")
        .expect("page has no dialog")
        .as_node()
        .clone()
}

/// Ids of the element children of the dialog's draft container, in DOM
/// order.
#[allow(dead_code)]
pub fn draft_order(dialog: &NodeRef) -> Vec<String> {
    let container = dialog
        .select_first("main")
        .expect("dialog has no draft container")
        .as_node()
        .clone();
    container
        .children()
        .filter_map(|child| {
            child
                .as_element()
                .and_then(|element| element.attributes.borrow().get("id").map(String::from))
        })
        .collect()
}

/// Text of the first element matching `selector`, if any.
#[allow(dead_code)]
pub fn text_of(root: &NodeRef, selector: &str) -> Option<String> {
    root.select_first(selector)
        .ok()
        .map(|found| found.as_node().text_contents())
}
