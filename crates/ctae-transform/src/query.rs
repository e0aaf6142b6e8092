//! Free-text query handling: single-trial vs batch dispatch.

use tracing::info;

use ctae_model::{QueryOutput, SingleOutcome, TrialId};

use crate::batch::{TrialSource, run_batch, trial_report};

/// Split free-text input into trial identifiers.
///
/// A comma or any whitespace separates identifiers; a single token with
/// neither is one trial. Empty tokens are dropped.
pub fn parse_query_input(input: &str) -> Vec<TrialId> {
    input
        .split([',', ' ', '\t', '\n'])
        .filter_map(|token| TrialId::new(token).ok())
        .collect()
}

/// Execute one user query against a registry snapshot.
///
/// Pure given the source: no state survives between calls. One
/// identifier yields the full single-trial report (or a terminal
/// "unavailable" outcome); several yield the batch comparison table.
pub fn run_query(source: &dyn TrialSource, input: &str) -> QueryOutput {
    let ids = parse_query_input(input);
    if let [id] = ids.as_slice() {
        info!(%id, "single-trial query");
        let outcome = match source.fetch(id).and_then(|data| trial_report(id, &data)) {
            Ok(report) => SingleOutcome::Report(Box::new(report)),
            Err(error) => {
                info!(%id, %error, "trial results unavailable");
                SingleOutcome::Unavailable { id: id.clone() }
            }
        };
        return QueryOutput::Single(outcome);
    }
    info!(count = ids.len(), "batch query");
    QueryOutput::Batch(run_batch(source, &ids))
}
