//! Multi-trial batch orchestration with per-trial failure isolation.

use tracing::{info_span, warn};

use ctae_model::{
    AeError, BatchRow, EventCategory, Result, TrialData, TrialId, TrialMetrics, TrialReport,
};

use crate::summary::{category_report, group_totals, trial_metrics};

/// Seam to the external registry collaborator: one fetch per trial id.
///
/// An `Err` is a fetch-level failure (network, HTTP, malformed JSON,
/// no matching study). A payload without a results section comes back
/// `Ok` with `adverse_events: None` so callers can still reach the
/// declared enrollment count.
pub trait TrialSource {
    fn fetch(&self, id: &TrialId) -> Result<TrialData>;
}

/// Build the full per-trial report from already-fetched data.
///
/// Fails with [`AeError::MissingResults`] when the payload carries no
/// adverse-events block.
pub fn trial_report(id: &TrialId, data: &TrialData) -> Result<TrialReport> {
    let events = data
        .adverse_events
        .as_ref()
        .ok_or(AeError::MissingResults)?;
    let totals = group_totals(&events.groups);
    let sae = category_report(EventCategory::Serious, events, &totals);
    let oae = category_report(EventCategory::Other, events, &totals);
    let summary = trial_metrics(&totals, &sae, &oae);
    Ok(TrialReport {
        id: id.clone(),
        sae,
        oae,
        summary,
    })
}

/// Run the summary pipeline for every requested trial.
///
/// Each trial is processed independently: a fetch failure or missing
/// results section degrades that trial's row, never the batch. The
/// output has one row per input id, in input order.
pub fn run_batch(source: &dyn TrialSource, ids: &[TrialId]) -> Vec<BatchRow> {
    ids.iter()
        .map(|id| {
            let span = info_span!("trial", id = %id);
            let _guard = span.enter();
            BatchRow {
                id: id.clone(),
                metrics: batch_metrics(source, id),
            }
        })
        .collect()
}

fn batch_metrics(source: &dyn TrialSource, id: &TrialId) -> TrialMetrics {
    let data = match source.fetch(id) {
        Ok(data) => data,
        Err(error) => {
            warn!(%id, %error, "fetch failed, emitting unavailable row");
            return TrialMetrics::unavailable();
        }
    };
    match trial_report(id, &data) {
        Ok(report) => report.summary,
        Err(error) => {
            // Degraded row: only the declared enrollment count survives.
            warn!(%id, %error, "falling back to enrollment count");
            TrialMetrics::enrollment_only(data.enrollment)
        }
    }
}
