//! impost-core: drafts-dialog enhancement engine.
//!
//! Works on a mirrored DOM of the host page plus its mutation and message
//! streams: finds the scheduled-drafts dialog, builds one record per
//! draft, orders the records, and reconciles the dialog so it shows the
//! order, a sort-direction label, a draft count, and per-draft time
//! annotations. Passes are idempotent and gated by a processed marker, so
//! the engine never chases its own writes.
//!
//! The schedule-text recognition lives in the `impost-schedule` crate;
//! this crate owns everything that touches the DOM.

pub mod classify;
pub mod collect;
pub mod content;
pub mod dom;
pub mod engine;
pub mod error;
pub mod message;
pub mod record;
pub mod reconcile;
pub mod settings;
pub mod sort;

// Engine surface
pub use engine::{find_drafts_dialog, Engine, MutationEvent, PassContext, PassOutcome};

// Pipeline stages
pub use classify::{has_scheduleable_content, is_drafts_dialog};
pub use collect::collect_drafts;
pub use content::extract_content;
pub use reconcile::{reconcile, strip_enhancements};
pub use sort::{restore_original_order, sort_records};

// Data types
pub use error::{Result, StoreError};
pub use message::{DraftStats, EngineMessage, NextScheduled};
pub use record::DraftRecord;
pub use settings::{InMemorySettingsStore, Settings, SettingsStore, SortOrder};
