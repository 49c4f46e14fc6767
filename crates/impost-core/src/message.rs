//! Message-channel wire types.
//!
//! The host relays control messages as JSON objects tagged by `action`.
//! These types pin that wire shape; the engine handles the decoded values
//! in [`crate::engine::Engine::handle_message`].

use serde::{Deserialize, Serialize};

use crate::settings::SortOrder;

/// Inbound control messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum EngineMessage {
    /// Switch sort direction and reprocess the dialog
    ChangeSortOrder {
        #[serde(rename = "sortOrder")]
        sort_order: SortOrder,
    },
    /// Enable or disable reordering
    ToggleAutoSort { enabled: bool },
    /// Show or hide per-draft time annotations
    ToggleTimeIndicators { enabled: bool },
    /// Show or hide the heading count badge
    ToggleDraftCount { enabled: bool },
    /// Show or hide the heading sort-direction label
    ToggleSortIndicator { enabled: bool },
    /// Ask for stats from the most recent pass
    GetDraftStats,
}

/// Stats snapshot answered to `getDraftStats`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStats {
    /// Records produced by the last pass
    pub total_drafts: usize,
    /// Earliest scheduled draft, if any record carried a schedule
    pub next_scheduled: Option<NextScheduled>,
}

/// The earliest scheduled draft, clipped for popup display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextScheduled {
    /// Content snippet, truncated with a trailing ellipsis
    pub content: String,
    /// Relative label, e.g. "in 2 days - 5 hours"
    pub time_str: String,
}
