//! Data models module
//!
//! Defines the two persisted aggregates: the habit Tracker and the Journal.

pub mod journal;
pub mod tracker;

pub use journal::{Journal, JOURNAL_DEFAULT};
pub use tracker::{LifeSummary, Selector, Tracker, TRACKER_DEFAULT};
