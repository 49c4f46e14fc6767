//! Event-driven engine: watches mutations, answers messages, runs passes.
//!
//! The engine is single-threaded. The host serializes mutation batches and
//! messages onto it, and every entry point takes the clock reading as an
//! argument, so a pass is a pure function of the DOM, the settings, the
//! random source, and `now`.

use chrono::{DateTime, Utc};
use kuchiki::NodeRef;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::classify::is_drafts_dialog;
use crate::collect::collect_drafts;
use crate::dom;
use crate::message::{DraftStats, EngineMessage, NextScheduled};
use crate::record::DraftRecord;
use crate::reconcile::{reconcile, strip_enhancements};
use crate::settings::{Settings, SettingsStore};
use crate::sort::{restore_original_order, sort_records};

/// Where dialogs appear in the host page.
const DIALOG_SELECTOR: &str = "[role=\"dialog\"], [aria-modal=\"true\"]";

/// Stats snippets are clipped to this many bytes.
const STATS_SNIPPET_LEN: usize = 50;

/// One host mutation: the nodes it added.
#[derive(Debug, Clone, Default)]
pub struct MutationEvent {
    pub added: Vec<NodeRef>,
}

impl MutationEvent {
    pub fn new(added: Vec<NodeRef>) -> Self {
        Self { added }
    }

    /// True when any added node is (or contains) one of our injections.
    fn is_self_inflicted(&self) -> bool {
        self.added.iter().any(contains_injected)
    }
}

fn contains_injected(node: &NodeRef) -> bool {
    if let Some(element) = node.as_element() {
        if dom::is_injected_element(element) {
            return true;
        }
    }
    !dom::select_all(node, dom::INJECTED_SELECTOR).is_empty()
}

/// Outcome of one dialog pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The dialog was reconciled; carries the record count.
    Processed { drafts: usize },
    /// The processed marker was present and the pass was not forced.
    AlreadyProcessed,
}

/// Per-pass state threaded through the pipeline stages: one settings
/// snapshot, one clock reading, one random source.
pub struct PassContext<'rng> {
    pub settings: Settings,
    pub now: DateTime<Utc>,
    pub rng: &'rng mut StdRng,
}

/// The drafts-dialog engine.
pub struct Engine {
    settings: Settings,
    rng: StdRng,
    stats: DraftStats,
}

impl Engine {
    /// Build an engine with a settings snapshot from `store`. A store
    /// failure logs and falls back to defaults.
    pub fn new(store: &impl SettingsStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Deterministic construction for tests and reproducible hosts.
    pub fn with_seed(store: &impl SettingsStore, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: &impl SettingsStore, rng: StdRng) -> Self {
        let settings = store.load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load settings: {}, using defaults", err);
            Settings::default()
        });
        Self {
            settings,
            rng,
            stats: DraftStats::default(),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stats retained from the most recent pass.
    pub fn draft_stats(&self) -> DraftStats {
        self.stats.clone()
    }

    /// Mutation entry point. Batches that only reflect our own injections
    /// are ignored; anything else triggers a document scan. Returns how
    /// many dialogs were processed.
    pub fn handle_mutations(
        &mut self,
        document: &NodeRef,
        mutations: &[MutationEvent],
        now: DateTime<Utc>,
    ) -> usize {
        let relevant = mutations.iter().any(|event| !event.is_self_inflicted());
        if !relevant {
            return 0;
        }
        self.scan_document(document, now)
    }

    /// Find candidate dialogs and process the unprocessed drafts ones.
    pub fn scan_document(&mut self, document: &NodeRef, now: DateTime<Utc>) -> usize {
        let mut processed = 0;
        for dialog in dom::select_all(document, DIALOG_SELECTOR) {
            if dom::has_attribute(&dialog, dom::PROCESSED_ATTR) {
                continue;
            }
            if !is_drafts_dialog(&dialog) {
                continue;
            }
            if let PassOutcome::Processed { .. } = self.process_dialog(&dialog, now, false) {
                processed += 1;
            }
        }
        processed
    }

    /// Message entry point. Settings changes update the snapshot and force
    /// a reprocessing pass; `GetDraftStats` answers from retained stats.
    pub fn handle_message(
        &mut self,
        document: &NodeRef,
        message: EngineMessage,
        now: DateTime<Utc>,
    ) -> Option<DraftStats> {
        match message {
            EngineMessage::ChangeSortOrder { sort_order } => {
                self.settings.sort_order = sort_order;
            }
            EngineMessage::ToggleAutoSort { enabled } => {
                self.settings.auto_sort = enabled;
            }
            EngineMessage::ToggleTimeIndicators { enabled } => {
                self.settings.show_time_indicators = enabled;
            }
            EngineMessage::ToggleDraftCount { enabled } => {
                self.settings.show_draft_count = enabled;
            }
            EngineMessage::ToggleSortIndicator { enabled } => {
                self.settings.show_sort_indicator = enabled;
            }
            EngineMessage::GetDraftStats => return Some(self.stats.clone()),
        }

        match find_drafts_dialog(document) {
            Some(dialog) => {
                self.process_dialog(&dialog, now, true);
            }
            None => tracing::debug!("no drafts dialog to reprocess"),
        }
        None
    }

    /// Run one pass over one dialog.
    pub fn process_dialog(
        &mut self,
        dialog: &NodeRef,
        now: DateTime<Utc>,
        force: bool,
    ) -> PassOutcome {
        if !force && dom::has_attribute(dialog, dom::PROCESSED_ATTR) {
            return PassOutcome::AlreadyProcessed;
        }
        if force {
            strip_enhancements(dialog);
        }

        let mut ctx = PassContext {
            settings: self.settings.clone(),
            now,
            rng: &mut self.rng,
        };
        let mut records = collect_drafts(dialog, &mut ctx);
        if ctx.settings.auto_sort {
            sort_records(&mut records, ctx.settings.sort_order);
        } else {
            restore_original_order(&mut records);
        }
        reconcile(dialog, &records, &ctx.settings);
        dom::set_attribute(dialog, dom::PROCESSED_ATTR, "true");

        tracing::debug!("processed drafts dialog with {} drafts", records.len());

        self.stats = compute_stats(&records);
        PassOutcome::Processed {
            drafts: records.len(),
        }
    }
}

/// First candidate dialog that classifies as the drafts dialog.
pub fn find_drafts_dialog(document: &NodeRef) -> Option<NodeRef> {
    dom::select_all(document, DIALOG_SELECTOR)
        .into_iter()
        .find(is_drafts_dialog)
}

fn compute_stats(records: &[DraftRecord]) -> DraftStats {
    let next_scheduled = records
        .iter()
        .filter(|record| record.scheduled_at.is_some())
        .min_by_key(|record| record.scheduled_at)
        .map(|record| NextScheduled {
            content: clip_snippet(&record.content),
            time_str: record.scheduled_label.clone(),
        });
    DraftStats {
        total_drafts: records.len(),
        next_scheduled,
    }
}

/// Clip to display length without splitting a UTF-8 character. The
/// ellipsis is unconditional.
fn clip_snippet(content: &str) -> String {
    let mut end = STATS_SNIPPET_LEN.min(content.len());
    while end > 0 && !content.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &content[..end])
}
