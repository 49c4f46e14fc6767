//! DOM helpers shared across the pipeline.
//!
//! Everything the engine injects carries an `impost-`-prefixed class, and
//! host nodes it touches carry a `data-impost-*` attribute. Text reads in
//! this module prune injected subtrees, so injected chrome never feeds
//! back into classification or extraction on later passes.

use html5ever::{namespace_url, ns, LocalName, QualName};
use kuchiki::{Attribute, ElementData, ExpandedName, NodeRef};

/// Class prefix shared by every injected element.
pub const INJECTED_CLASS_PREFIX: &str = "impost-";

/// Heading sort-direction label.
pub const STATUS_CLASS: &str = "impost-status";
/// Heading draft-count badge.
pub const COUNT_BADGE_CLASS: &str = "impost-count-badge";
/// Time annotation appended next to the "posting" text of a draft.
pub const TIME_INFO_CLASS: &str = "impost-time-info";
/// Standalone time annotation prepended to a draft.
pub const TIME_SUBTLE_CLASS: &str = "impost-time-subtle";

/// Marks a dialog as already reconciled.
pub const PROCESSED_ATTR: &str = "data-impost-processed";
/// Marks a draft element as carrying a time annotation.
pub const TIME_ADDED_ATTR: &str = "data-impost-time-added";

/// Selector matching every injected element.
pub const INJECTED_SELECTOR: &str = "[class*=\"impost-\"]";

/// True when the element is one of ours.
pub fn is_injected_element(element: &ElementData) -> bool {
    element
        .attributes
        .borrow()
        .get("class")
        .map_or(false, |classes| {
            classes
                .split_whitespace()
                .any(|token| token.starts_with(INJECTED_CLASS_PREFIX))
        })
}

/// Concatenated text of the subtree, skipping injected elements.
pub fn visible_text(node: &NodeRef) -> String {
    let mut out = String::new();
    push_visible_text(node, &mut out);
    out
}

fn push_visible_text(node: &NodeRef, out: &mut String) {
    if let Some(text) = node.as_text() {
        out.push_str(&text.borrow());
        return;
    }
    if let Some(element) = node.as_element() {
        if is_injected_element(element) {
            return;
        }
    }
    for child in node.children() {
        push_visible_text(&child, out);
    }
}

/// Trimmed text-node values in document order, skipping injected subtrees
/// and fragments shorter than `min_len` after trimming.
pub fn visible_text_fragments(node: &NodeRef, min_len: usize) -> Vec<String> {
    let mut out = Vec::new();
    push_fragments(node, min_len, &mut out);
    out
}

fn push_fragments(node: &NodeRef, min_len: usize, out: &mut Vec<String>) {
    if let Some(text) = node.as_text() {
        let trimmed = text.borrow().trim().to_string();
        if trimmed.len() >= min_len {
            out.push(trimmed);
        }
        return;
    }
    if let Some(element) = node.as_element() {
        if is_injected_element(element) {
            return;
        }
    }
    for child in node.children() {
        push_fragments(&child, min_len, out);
    }
}

/// First text node under `node`, in document order and skipping injected
/// subtrees, whose lowercased content contains `needle`.
pub fn find_text_node_containing(node: &NodeRef, needle: &str) -> Option<NodeRef> {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            if text.borrow().to_lowercase().contains(needle) {
                return Some(child);
            }
            continue;
        }
        if let Some(element) = child.as_element() {
            if is_injected_element(element) {
                continue;
            }
        }
        if let Some(found) = find_text_node_containing(&child, needle) {
            return Some(found);
        }
    }
    None
}

/// True when `ancestor` is a strict ancestor of `node`.
pub fn is_ancestor(ancestor: &NodeRef, node: &NodeRef) -> bool {
    node.ancestors().any(|candidate| &candidate == ancestor)
}

/// Zero-based position of `node` among its parent's element children.
/// Detached nodes report position zero.
pub fn sibling_index(node: &NodeRef) -> usize {
    match node.parent() {
        Some(parent) => parent
            .children()
            .filter(|child| child.as_element().is_some())
            .position(|child| &child == node)
            .unwrap_or(0),
        None => 0,
    }
}

/// Elements matching `selector` within the subtree, collected up front so
/// callers can detach while iterating. The root itself is excluded, and a
/// selector that fails to parse yields no matches.
pub fn select_all(node: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match node.select(selector) {
        Ok(matches) => matches
            .map(|matched| matched.as_node().clone())
            .filter(|found| found != node)
            .collect(),
        Err(()) => Vec::new(),
    }
}

/// Build one of our marker elements with a single class and a text child.
pub fn new_marked_element(tag: &str, class: &str, text: &str) -> NodeRef {
    let name = QualName::new(None, ns!(html), LocalName::from(tag));
    let class_attr = (
        ExpandedName::new(ns!(), "class"),
        Attribute {
            prefix: None,
            value: class.to_string(),
        },
    );
    let element = NodeRef::new_element(name, vec![class_attr]);
    element.append(NodeRef::new_text(text));
    element
}

/// Read an attribute off an element node.
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(|value| value.to_string())
}

/// True when an element node carries the attribute.
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .map_or(false, |element| element.attributes.borrow().contains(name))
}

/// Set an attribute on an element node. Non-element nodes are left alone.
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }
}

/// Remove an attribute from an element node.
pub fn remove_attribute(node: &NodeRef, name: &str) {
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().remove(name);
    }
}
