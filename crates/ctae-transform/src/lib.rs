//! Adverse-event transformation pipeline.
//!
//! This crate is the core of the explorer:
//!
//! - **decode**: arm-title decoding with raw-id fallback
//! - **flatten**: one-to-many unnest of nested event statistics
//! - **pivot**: schema-tolerant pivot into the wide table
//! - **summary**: group totals, detail-table augmentation, derived metrics
//! - **batch**: multi-trial orchestration behind the [`TrialSource`] seam
//! - **query**: free-text dispatch between single-trial and batch mode

pub mod batch;
pub mod decode;
pub mod flatten;
pub mod pivot;
pub mod query;
pub mod summary;

pub use batch::{TrialSource, run_batch, trial_report};
pub use decode::decode_group;
pub use flatten::flatten_events;
pub use pivot::{normalize, pivot_records};
pub use query::{parse_query_input, run_query};
pub use summary::{build_detail_table, category_report, group_totals, trial_metrics};
