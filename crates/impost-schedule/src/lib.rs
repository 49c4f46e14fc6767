//! impost-schedule: schedule-time recognition for draft post text.
//!
//! Draft entries on the host site describe their schedule in loose prose:
//! "Posting tomorrow at 2:30 PM", "Friday review", "in 5 hours". This crate
//! turns that prose into absolute timestamps, samples synthetic times for
//! mentions that carry no clock, and renders relative display labels like
//! "in 2 days - 5 hours".

pub mod extract;
pub mod format;
pub mod patterns;

pub use extract::*;
pub use format::*;
pub use patterns::*;
