//! Draft records produced by one collection pass.

use std::fmt;

use chrono::{DateTime, Utc};
use kuchiki::NodeRef;

/// One parsed draft item.
///
/// Records live for a single pass. The DOM stays the source of truth
/// between passes; a later pass rebuilds records from scratch.
#[derive(Clone)]
pub struct DraftRecord {
    /// Synthetic id, `draft_{original_index}`.
    pub id: String,
    /// The live draft element. Only the reconciler mutates it.
    pub node: NodeRef,
    /// Representative text snippet.
    pub content: String,
    /// Absolute schedule; `None` when no time was recoverable.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Relative label computed from `scheduled_at` at extraction time.
    pub scheduled_label: String,
    /// Position in extraction order, for restoring the original order.
    pub original_index: usize,
}

// The DOM handle would print a whole subtree; show the scalar fields.
impl fmt::Debug for DraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftRecord")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("scheduled_at", &self.scheduled_at)
            .field("scheduled_label", &self.scheduled_label)
            .field("original_index", &self.original_index)
            .finish()
    }
}
