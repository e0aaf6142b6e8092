//! Data model for the ClinicalTrials.gov adverse-event explorer.
//!
//! Entities live for the duration of one query: the registry client
//! produces [`TrialData`], the transform pipeline turns it into
//! [`EventTable`]s and the summary artifacts, and the display layer
//! renders those. Nothing here is cached or persisted.

pub mod error;
pub mod events;
pub mod ids;
pub mod summary;
pub mod table;
pub mod value;

pub use error::{AeError, Result};
pub use events::{AdverseEvent, AdverseEvents, EventGroup, EventStat, EventStatRecord, TrialData};
pub use ids::TrialId;
pub use summary::{
    BATCH_HEADERS, BatchRow, CategoryReport, CategorySummaryRow, DetailRow, DetailTable,
    GroupTotals, QueryOutput, SingleOutcome, TrialMetrics, TrialReport,
};
pub use table::{EventCategory, EventRow, EventTable, Metric};
pub use value::{AeValue, NOT_AVAILABLE_LABEL, format_numeric, round_to};
