//! Engine settings and the store boundary.
//!
//! Settings live in the host's key-value store; the engine reads one
//! snapshot at construction and applies message-driven updates in memory
//! after that. Field names follow the store's wire keys so a snapshot
//! round-trips through JSON unchanged.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Direction drafts are ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Soonest schedule first
    Earliest,
    /// Furthest schedule first
    Latest,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Earliest
    }
}

/// One settings snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Direction used by the reorder step
    pub sort_order: SortOrder,
    /// Reorder drafts at all; off keeps extraction order
    pub auto_sort: bool,
    /// Inject a per-draft time annotation
    pub show_time_indicators: bool,
    /// Inject the heading draft-count badge
    pub show_draft_count: bool,
    /// Inject the heading sort-direction label
    pub show_sort_indicator: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Earliest,
            auto_sort: true,
            show_time_indicators: true,
            show_draft_count: true,
            show_sort_indicator: true,
        }
    }
}

/// Read side of the host's settings store.
pub trait SettingsStore {
    /// Fetch the current snapshot.
    fn load(&self) -> Result<Settings>;
}

/// Fixed-snapshot store for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    settings: Settings,
}

impl InMemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let settings = Settings::default();
        assert_eq!(settings.sort_order, SortOrder::Earliest);
        assert!(settings.auto_sort);
        assert!(settings.show_time_indicators);
        assert!(settings.show_draft_count);
        assert!(settings.show_sort_indicator);
    }

    #[test]
    fn settings_use_store_wire_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "sortOrder",
            "autoSort",
            "showTimeIndicators",
            "showDraftCount",
            "showSortIndicator",
        ] {
            assert!(object.contains_key(key), "missing wire key {}", key);
        }
    }

    #[test]
    fn sort_order_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Earliest).unwrap(),
            "\"earliest\""
        );
        assert_eq!(
            serde_json::to_string(&SortOrder::Latest).unwrap(),
            "\"latest\""
        );
    }

    #[test]
    fn partial_snapshot_fills_missing_fields_with_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"sortOrder":"latest","autoSort":false}"#).unwrap();
        assert_eq!(settings.sort_order, SortOrder::Latest);
        assert!(!settings.auto_sort);
        assert!(settings.show_time_indicators);
        assert!(settings.show_draft_count);
        assert!(settings.show_sort_indicator);
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings {
            sort_order: SortOrder::Latest,
            auto_sort: false,
            show_time_indicators: true,
            show_draft_count: false,
            show_sort_indicator: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn in_memory_store_returns_its_snapshot() {
        let store = InMemorySettingsStore::new(Settings {
            auto_sort: false,
            ..Settings::default()
        });
        let loaded = store.load().unwrap();
        assert!(!loaded.auto_sort);
    }
}
