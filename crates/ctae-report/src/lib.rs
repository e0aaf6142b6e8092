//! Report output for the adverse-event explorer.

pub mod export;

pub use export::{
    export_batch, export_trial_report, write_aggregate_csv, write_batch_csv,
    write_category_summary_csv, write_detail_csv,
};
